//! Public blog

use axum::extract::{Path, State};
use portfolio_service::dto::{BlogPostResponse, BlogPostSummaryResponse};
use portfolio_service::services::BlogService;

use crate::extractors::HxRequest;
use crate::response::{ApiResult, Page};
use crate::state::AppState;

/// Published posts, newest first
///
/// GET /blog
pub async fn list(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<Vec<BlogPostSummaryResponse>>> {
    let posts = BlogService::new(state.service_context()).published().await?;
    Ok(Page::new(fragment, posts))
}

/// A single published post
///
/// GET /blog/:slug
pub async fn show(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    Path(slug): Path<String>,
) -> ApiResult<Page<BlogPostResponse>> {
    let post = BlogService::new(state.service_context())
        .post(&slug)
        .await?;
    Ok(Page::new(fragment, post))
}
