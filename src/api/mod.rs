use axum::{Router, routing::get};
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::templates::Templates;
use crate::trials::TrialsClient;

pub mod handlers;
pub mod models;

/// Shared, read-only collaborators handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub trials: Arc<TrialsClient>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(trials: TrialsClient, templates: Templates) -> AppState {
        AppState {
            trials: Arc::new(trials),
            templates: Arc::new(templates),
        }
    }
}

pub fn create_router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::index_handler))
        .route("/search", get(handlers::search_handler))
        .with_state(state)
        // Static assets, served with the /assets prefix stripped
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
}
