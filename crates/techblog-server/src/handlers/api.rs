//! JSON post endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use techblog_core::{Post, PostSummary};
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::SearchQuery;
use crate::state::AppState;

/// Handler for GET /api/posts?q=...
#[instrument(skip_all, fields(q = ?query.q))]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<PostSummary>>, AppError> {
    let posts = state.queries().list_posts(query.q.as_deref()).await?;

    tracing::debug!("Listing {} posts", posts.len());

    Ok(Json(posts.as_ref().clone()))
}

/// Handler for GET /api/posts/{slug}
#[instrument(skip_all, fields(slug = %slug))]
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, AppError> {
    match state.queries().get_post(&slug).await? {
        Some(post) => Ok(Json(post.as_ref().clone())),
        None => Err(AppError::NotFound { slug }),
    }
}
