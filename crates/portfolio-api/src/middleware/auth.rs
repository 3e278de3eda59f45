//! Admin session gate
//!
//! Wraps every protected `/admin` route. Requests without a live session
//! never reach the handler.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use portfolio_common::{LOGIN_PATH, SESSION_COOKIE};
use portfolio_service::services::AuthService;
use tracing::debug;

use crate::extractors::is_fragment_request;
use crate::response::HX_REDIRECT;
use crate::state::AppState;

/// Let the request through only with a valid `session` cookie
///
/// htmx requests get `401` with `HX-Redirect` so the client navigates;
/// plain requests get `303 See Other` to the login page.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let token = jar.get(SESSION_COOKIE).map(|cookie| cookie.value());
    if AuthService::new(state.service_context())
        .is_authenticated(token)
        .await
    {
        return next.run(request).await;
    }

    debug!(path = %request.uri().path(), "Unauthenticated admin request");
    if is_fragment_request(request.headers()) {
        (StatusCode::UNAUTHORIZED, [(HX_REDIRECT, LOGIN_PATH)]).into_response()
    } else {
        Redirect::to(LOGIN_PATH).into_response()
    }
}
