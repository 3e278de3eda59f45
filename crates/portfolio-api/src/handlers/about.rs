//! About page and skill endpoints

use axum::extract::{Query, State};
use portfolio_service::dto::{AboutPageResponse, SkillDetailResponse, SkillFilter, SkillResponse};
use portfolio_service::services::AboutService;

use crate::extractors::{HxRequest, IdPath};
use crate::response::{ApiResult, Page};
use crate::state::AppState;

/// Landing page: skills, experience, education
///
/// GET /
pub async fn index(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<AboutPageResponse>> {
    let about = AboutService::new(state.service_context()).about_page().await?;
    Ok(Page::new(fragment, about))
}

/// Skill list, optionally filtered by category
///
/// GET /api/skills?category_id=<id|all>
pub async fn skills(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    Query(filter): Query<SkillFilter>,
) -> ApiResult<Page<Vec<SkillResponse>>> {
    let skills = AboutService::new(state.service_context())
        .skills(filter)
        .await?;
    Ok(Page::new(fragment, skills))
}

/// Skill popover with a random project that used it
///
/// GET /api/skills/:id
pub async fn skill_detail(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    IdPath(id): IdPath,
) -> ApiResult<Page<SkillDetailResponse>> {
    let detail = AboutService::new(state.service_context())
        .skill_detail(id)
        .await?;
    Ok(Page::new(fragment, detail))
}
