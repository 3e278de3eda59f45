//! Admin handlers
//!
//! Everything here runs behind the session gate. Mutations answer `200`
//! with an `HX-Trigger` event naming the list to refresh.

pub mod blog;
pub mod categories;
pub mod education;
pub mod experiences;
pub mod projects;
pub mod skills;

use axum::extract::State;
use portfolio_service::dto::DashboardResponse;
use portfolio_service::services::DashboardService;

use crate::extractors::HxRequest;
use crate::response::{ApiResult, Page};
use crate::state::AppState;

/// Admin landing page with content counts
///
/// GET /admin
pub async fn dashboard(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
) -> ApiResult<Page<DashboardResponse>> {
    let overview = DashboardService::new(state.service_context())
        .overview()
        .await?;
    Ok(Page::new(fragment, overview))
}
