//! Public project cards

use axum::extract::State;
use portfolio_service::dto::ProjectCardResponse;
use portfolio_service::services::ProjectService;

use crate::extractors::{HxRequest, IdPath};
use crate::response::{ApiResult, Page};
use crate::state::AppState;

/// GET /projects
pub async fn list(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<Vec<ProjectCardResponse>>> {
    let cards = ProjectService::new(state.service_context()).cards().await?;
    Ok(Page::new(fragment, cards))
}

/// GET /api/projects/:id/expand
pub async fn expand(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    IdPath(id): IdPath,
) -> ApiResult<Page<ProjectCardResponse>> {
    let card = ProjectService::new(state.service_context())
        .card(id, true)
        .await?;
    Ok(Page::new(fragment, card))
}

/// GET /api/projects/:id/collapse
pub async fn collapse(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    IdPath(id): IdPath,
) -> ApiResult<Page<ProjectCardResponse>> {
    let card = ProjectService::new(state.service_context())
        .card(id, false)
        .await?;
    Ok(Page::new(fragment, card))
}
