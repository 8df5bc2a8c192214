use std::time::Duration;

use reqwest::StatusCode;

use super::TrialsError;
use super::models::{SearchResults, decode_error, decode_results};
use crate::search::PAGE_SIZE;

/// Rank cap sent with every query. The registry has always been queried with it.
const MAX_RANK: u32 = 30;

/// Thin client for the registry's `full_studies` query endpoint.
#[derive(Debug, Clone)]
pub struct TrialsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl TrialsClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<TrialsClient, TrialsError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TrialsError::Transport)?;
        Ok(TrialsClient {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches one page of studies matching `expr`.
    pub async fn search(&self, expr: &str, page: u32) -> Result<SearchResults, TrialsError> {
        let page_size = PAGE_SIZE.to_string();
        let page = page.to_string();
        let max_rank = MAX_RANK.to_string();

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("expr", expr),
                ("max_rnk", max_rank.as_str()),
                ("fmt", "JSON"),
                ("pageSize", page_size.as_str()),
                ("page", page.as_str()),
                ("language", "en"),
            ])
            .send()
            .await
            .map_err(TrialsError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(TrialsError::Transport)?;

        if status != StatusCode::OK {
            return match decode_error(&body) {
                Ok(err) => Err(TrialsError::Upstream {
                    status: status.as_u16(),
                    message: err.message,
                }),
                Err(_) => Err(TrialsError::MalformedError {
                    status: status.as_u16(),
                }),
            };
        }

        decode_results(&body).map_err(TrialsError::Decode)
    }
}
