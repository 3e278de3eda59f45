//! Skill category administration

use axum::extract::State;
use portfolio_service::dto::{CategoryForm, CategoryResponse, MutationResponse};
use portfolio_service::services::CategoryService;

use crate::extractors::{HxRequest, IdPath, ValidatedForm};
use crate::response::{refresh_event, ApiResult, Page, Triggered};
use crate::state::AppState;

/// GET /admin/categories
pub async fn list(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<Vec<CategoryResponse>>> {
    let items = CategoryService::new(state.service_context()).list().await?;
    Ok(Page::new(fragment, items))
}

/// POST /admin/categories
pub async fn create(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<CategoryForm>,
) -> ApiResult<Triggered<MutationResponse>> {
    let created = CategoryService::new(state.service_context())
        .create(form)
        .await?;
    Ok(Triggered::new(refresh_event("categories"), created))
}

/// PUT /admin/categories/:id
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedForm(form): ValidatedForm<CategoryForm>,
) -> ApiResult<Triggered<MutationResponse>> {
    let updated = CategoryService::new(state.service_context())
        .update(id, form)
        .await?;
    Ok(Triggered::new(refresh_event("categories"), updated))
}

/// DELETE /admin/categories/:id
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Triggered<MutationResponse>> {
    let deleted = CategoryService::new(state.service_context())
        .delete(id)
        .await?;
    Ok(Triggered::new(refresh_event("categories"), deleted))
}
