use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::search::PageParamError;
use crate::trials::TrialsError;

pub const UNEXPECTED_ERROR_BODY: &str = "Unexpected server error";

/// Everything that can end a request early.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Trials(#[from] TrialsError),
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl From<PageParamError> for AppError {
    fn from(err: PageParamError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                tracing::warn!("rejecting request: {msg}");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            AppError::Trials(TrialsError::Upstream { status, message }) => {
                tracing::error!("trials API returned {status}: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            AppError::Trials(err @ TrialsError::MalformedError { .. }) => {
                tracing::error!("{err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_BODY).into_response()
            }
            err => {
                tracing::error!("{err:#}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
