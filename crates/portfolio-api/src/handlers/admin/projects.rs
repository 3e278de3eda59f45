//! Project administration; the form carries the skill picker

use axum::extract::State;
use portfolio_service::dto::{MutationResponse, ProjectForm, ProjectFormResponse, ProjectResponse};
use portfolio_service::services::ProjectService;

use crate::extractors::{HxRequest, IdPath, ValidatedForm};
use crate::response::{refresh_event, ApiResult, Page, Triggered};
use crate::state::AppState;

/// GET /admin/projects
pub async fn list(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<Vec<ProjectResponse>>> {
    let items = ProjectService::new(state.service_context()).list().await?;
    Ok(Page::new(fragment, items))
}

/// GET /admin/projects/new
pub async fn new_form(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<ProjectFormResponse>> {
    let form = ProjectService::new(state.service_context()).form(None).await?;
    Ok(Page::new(fragment, form))
}

/// GET /admin/projects/:id/edit
pub async fn edit_form(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    IdPath(id): IdPath,
) -> ApiResult<Page<ProjectFormResponse>> {
    let form = ProjectService::new(state.service_context()).form(Some(id)).await?;
    Ok(Page::new(fragment, form))
}

/// POST /admin/projects
pub async fn create(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<ProjectForm>,
) -> ApiResult<Triggered<MutationResponse>> {
    let created = ProjectService::new(state.service_context()).create(form).await?;
    Ok(Triggered::new(refresh_event("projects"), created))
}

/// PUT /admin/projects/:id
///
/// Repeated `skill_ids` fields replace the project's links atomically.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedForm(form): ValidatedForm<ProjectForm>,
) -> ApiResult<Triggered<MutationResponse>> {
    let updated = ProjectService::new(state.service_context())
        .update(id, form)
        .await?;
    Ok(Triggered::new(refresh_event("projects"), updated))
}

/// DELETE /admin/projects/:id
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Triggered<MutationResponse>> {
    let deleted = ProjectService::new(state.service_context()).delete(id).await?;
    Ok(Triggered::new(refresh_event("projects"), deleted))
}
