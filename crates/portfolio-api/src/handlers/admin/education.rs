//! Education administration

use axum::extract::State;
use portfolio_service::dto::{
    EditFormResponse, EducationForm, EducationResponse, MutationResponse,
};
use portfolio_service::services::EducationService;

use crate::extractors::{HxRequest, IdPath, ValidatedForm};
use crate::response::{refresh_event, ApiResult, Page, Triggered};
use crate::state::AppState;

/// GET /admin/education
pub async fn list(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<Vec<EducationResponse>>> {
    let items = EducationService::new(state.service_context()).list().await?;
    Ok(Page::new(fragment, items))
}

/// GET /admin/education/new
pub async fn new_form(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<EditFormResponse<EducationResponse>>> {
    let form = EducationService::new(state.service_context()).form(None).await?;
    Ok(Page::new(fragment, form))
}

/// GET /admin/education/:id/edit
pub async fn edit_form(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    IdPath(id): IdPath,
) -> ApiResult<Page<EditFormResponse<EducationResponse>>> {
    let form = EducationService::new(state.service_context()).form(Some(id)).await?;
    Ok(Page::new(fragment, form))
}

/// POST /admin/education
pub async fn create(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<EducationForm>,
) -> ApiResult<Triggered<MutationResponse>> {
    let created = EducationService::new(state.service_context()).create(form).await?;
    Ok(Triggered::new(refresh_event("education"), created))
}

/// PUT /admin/education/:id
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedForm(form): ValidatedForm<EducationForm>,
) -> ApiResult<Triggered<MutationResponse>> {
    let updated = EducationService::new(state.service_context())
        .update(id, form)
        .await?;
    Ok(Triggered::new(refresh_event("education"), updated))
}

/// DELETE /admin/education/:id
///
/// Hard delete.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Triggered<MutationResponse>> {
    let deleted = EducationService::new(state.service_context()).delete(id).await?;
    Ok(Triggered::new(refresh_event("education"), deleted))
}
