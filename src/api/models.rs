use serde::Deserialize;

/// Query string of `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub expr: String,
    pub page: Option<String>,
}
