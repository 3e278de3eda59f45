//! Work experience administration

use axum::extract::State;
use portfolio_service::dto::{
    EditFormResponse, ExperienceForm, ExperienceResponse, MutationResponse,
};
use portfolio_service::services::ExperienceService;

use crate::extractors::{HxRequest, IdPath, ValidatedForm};
use crate::response::{refresh_event, ApiResult, Page, Triggered};
use crate::state::AppState;

/// GET /admin/experiences
pub async fn list(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<Vec<ExperienceResponse>>> {
    let items = ExperienceService::new(state.service_context()).list().await?;
    Ok(Page::new(fragment, items))
}

/// GET /admin/experiences/new
pub async fn new_form(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<EditFormResponse<ExperienceResponse>>> {
    let form = ExperienceService::new(state.service_context()).form(None).await?;
    Ok(Page::new(fragment, form))
}

/// GET /admin/experiences/:id/edit
pub async fn edit_form(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    IdPath(id): IdPath,
) -> ApiResult<Page<EditFormResponse<ExperienceResponse>>> {
    let form = ExperienceService::new(state.service_context()).form(Some(id)).await?;
    Ok(Page::new(fragment, form))
}

/// POST /admin/experiences
pub async fn create(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<ExperienceForm>,
) -> ApiResult<Triggered<MutationResponse>> {
    let created = ExperienceService::new(state.service_context()).create(form).await?;
    Ok(Triggered::new(refresh_event("experiences"), created))
}

/// PUT /admin/experiences/:id
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedForm(form): ValidatedForm<ExperienceForm>,
) -> ApiResult<Triggered<MutationResponse>> {
    let updated = ExperienceService::new(state.service_context())
        .update(id, form)
        .await?;
    Ok(Triggered::new(refresh_event("experiences"), updated))
}

/// DELETE /admin/experiences/:id
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Triggered<MutationResponse>> {
    let deleted = ExperienceService::new(state.service_context()).delete(id).await?;
    Ok(Triggered::new(refresh_event("experiences"), deleted))
}
