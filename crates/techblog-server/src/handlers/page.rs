//! HTML page handler.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::instrument;

use crate::cache::CacheError;
use crate::extractors::PageQuery;
use crate::render::{self, PageModel};
use crate::state::AppState;
use crate::view::View;

/// Handler for GET /?slug=...&q=...
///
/// One render pass: the sidebar list (filtered by `q`), then the main region
/// selected by `slug`. An unknown slug answers 404 with the sidebar intact.
#[instrument(skip_all, fields(slug = ?query.slug(), q = ?query.search_term()))]
pub async fn render_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    match build_page(&state, &query).await {
        Ok((status, html)) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Render pass failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(render::error_page())).into_response()
        },
    }
}

async fn build_page(
    state: &AppState,
    query: &PageQuery,
) -> Result<(StatusCode, String), CacheError> {
    let posts = state.queries().list_posts(query.search_term()).await?;

    let view = View::from_slug(query.slug());
    let content = view.resolve(state.queries(), posts.clone()).await?;

    let status = if content.is_not_found() {
        tracing::info!("Blog not found");
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    let html = render::page(&PageModel {
        posts: &posts,
        search: query.search_term(),
        slug: query.slug(),
        content: &content,
        credits: state.credits(),
    });

    Ok((status, html))
}
