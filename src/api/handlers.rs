use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::error::AppError;
use crate::search::{SearchState, parse_page};

use super::AppState;
use super::models::SearchParams;

pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render_index(None)?))
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let page = parse_page(params.page.as_deref())?;
    tracing::info!(search_key = %params.expr, page, "search request");

    let mut search = SearchState::new(params.expr, page);
    let results = state
        .trials
        .search(search.search_key(), search.next_page())
        .await?;

    search.attach_results(results);
    tracing::info!(
        total_pages = search.total_pages(),
        next_page = search.next_page(),
        "search results fetched"
    );

    Ok(Html(state.templates.render_index(Some(&search))?))
}
