//! Skill administration

use axum::extract::State;
use portfolio_service::dto::{MutationResponse, SkillForm, SkillFormResponse, SkillResponse};
use portfolio_service::services::SkillService;

use crate::extractors::{HxRequest, IdPath, ValidatedForm};
use crate::response::{refresh_event, ApiResult, Page, Triggered};
use crate::state::AppState;

/// GET /admin/skills
pub async fn list(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<Vec<SkillResponse>>> {
    let items = SkillService::new(state.service_context()).list().await?;
    Ok(Page::new(fragment, items))
}

/// GET /admin/skills/new
pub async fn new_form(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<SkillFormResponse>> {
    let form = SkillService::new(state.service_context()).form(None).await?;
    Ok(Page::new(fragment, form))
}

/// GET /admin/skills/:id/edit
pub async fn edit_form(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    IdPath(id): IdPath,
) -> ApiResult<Page<SkillFormResponse>> {
    let form = SkillService::new(state.service_context()).form(Some(id)).await?;
    Ok(Page::new(fragment, form))
}

/// POST /admin/skills
///
/// The category must exist and not be deleted.
pub async fn create(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<SkillForm>,
) -> ApiResult<Triggered<MutationResponse>> {
    let created = SkillService::new(state.service_context()).create(form).await?;
    Ok(Triggered::new(refresh_event("skills"), created))
}

/// PUT /admin/skills/:id
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedForm(form): ValidatedForm<SkillForm>,
) -> ApiResult<Triggered<MutationResponse>> {
    let updated = SkillService::new(state.service_context())
        .update(id, form)
        .await?;
    Ok(Triggered::new(refresh_event("skills"), updated))
}

/// DELETE /admin/skills/:id
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Triggered<MutationResponse>> {
    let deleted = SkillService::new(state.service_context()).delete(id).await?;
    Ok(Triggered::new(refresh_event("skills"), deleted))
}
