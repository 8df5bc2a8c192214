use anyhow::Context;
use tokio::net::TcpListener;

use trialsearch::api::{AppState, create_router};
use trialsearch::config::Config;
use trialsearch::templates::Templates;
use trialsearch::trials::TrialsClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let config = Config::from_env()?;

    let templates = match &config.templates_dir {
        Some(dir) => Templates::from_dir(dir),
        None => Templates::embedded().context("Failed to load embedded templates")?,
    };
    let trials = TrialsClient::new(&config.trials_api_url, config.upstream_timeout)
        .context("Failed to build trials API client")?;

    let app = create_router(AppState::new(trials, templates), &config.assets_dir);

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
