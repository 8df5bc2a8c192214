//! Client and data types for the clinical-trials registry.

use thiserror::Error;

pub mod client;
pub mod models;

pub use client::TrialsClient;
pub use models::{SearchResults, StudySummary, UpstreamErrorBody, decode_results};

#[derive(Debug, Error)]
pub enum TrialsError {
    #[error("request to trials API failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("trials API returned {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("trials API returned {status} with an unreadable error body")]
    MalformedError { status: u16 },
    #[error("could not decode trials API response: {0}")]
    Decode(#[source] serde_json::Error),
}
