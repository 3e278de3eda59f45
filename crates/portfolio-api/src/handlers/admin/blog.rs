//! Blog post administration

use axum::extract::State;
use portfolio_service::dto::{
    BlogPostForm, BlogPostResponse, BlogPostSummaryResponse, EditFormResponse, MutationResponse,
};
use portfolio_service::services::BlogService;

use crate::extractors::{HxRequest, IdPath, ValidatedForm};
use crate::response::{refresh_event, ApiResult, Page, Triggered};
use crate::state::AppState;

/// GET /admin/blog
///
/// Unlike the public list, drafts are included.
pub async fn list(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<Vec<BlogPostSummaryResponse>>> {
    let items = BlogService::new(state.service_context()).list().await?;
    Ok(Page::new(fragment, items))
}

/// GET /admin/blog/new
pub async fn new_form(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<EditFormResponse<BlogPostResponse>>> {
    let form = BlogService::new(state.service_context()).form(None).await?;
    Ok(Page::new(fragment, form))
}

/// GET /admin/blog/:id/edit
pub async fn edit_form(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    IdPath(id): IdPath,
) -> ApiResult<Page<EditFormResponse<BlogPostResponse>>> {
    let form = BlogService::new(state.service_context()).form(Some(id)).await?;
    Ok(Page::new(fragment, form))
}

/// POST /admin/blog
pub async fn create(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<BlogPostForm>,
) -> ApiResult<Triggered<MutationResponse>> {
    let created = BlogService::new(state.service_context()).create(form).await?;
    Ok(Triggered::new(refresh_event("blog"), created))
}

/// PUT /admin/blog/:id
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedForm(form): ValidatedForm<BlogPostForm>,
) -> ApiResult<Triggered<MutationResponse>> {
    let updated = BlogService::new(state.service_context())
        .update(id, form)
        .await?;
    Ok(Triggered::new(refresh_event("blog"), updated))
}

/// DELETE /admin/blog/:id
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Triggered<MutationResponse>> {
    let deleted = BlogService::new(state.service_context()).delete(id).await?;
    Ok(Triggered::new(refresh_event("blog"), deleted))
}
