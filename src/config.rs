use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_TRIALS_API_URL: &str = "https://clinicaltrials.gov/api/query/full_studies";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub trials_api_url: String,
    pub upstream_timeout: Duration,
    pub assets_dir: String,
    pub templates_dir: Option<String>,
}

impl Config {
    /// Reads configuration from the environment, loading a `.env` file first if present.
    pub fn from_env() -> Result<Config> {
        dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source, applying defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let get_env = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let get_env_or_default =
            |key: &str, default: &str| get_env(key).unwrap_or_else(|| default.to_string());

        let port = get_env_or_default("PORT", "3000");
        let timeout_secs = get_env_or_default("UPSTREAM_TIMEOUT_SECS", "10");
        Ok(Config {
            port: port
                .parse()
                .with_context(|| format!("Invalid PORT: {port}"))?,
            trials_api_url: get_env_or_default("TRIALS_API_URL", DEFAULT_TRIALS_API_URL),
            upstream_timeout: Duration::from_secs(
                timeout_secs
                    .parse()
                    .with_context(|| format!("Invalid UPSTREAM_TIMEOUT_SECS: {timeout_secs}"))?,
            ),
            assets_dir: get_env_or_default("ASSETS_DIR", "assets"),
            templates_dir: get_env("TEMPLATES_DIR"),
        })
    }
}
