//! Admin authentication handlers
//!
//! Login form, login, and logout. None of these sit behind the session gate.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar, Form,
};
use portfolio_common::{AppError, ADMIN_PATH, LOGIN_PATH, SESSION_COOKIE, SESSION_TTL_DAYS};
use portfolio_service::dto::{LoginPageResponse, LoginRequest};
use portfolio_service::services::AuthService;
use portfolio_service::ServiceError;

use crate::extractors::HxRequest;
use crate::response::{ApiError, ApiResult, Page, HX_REDIRECT};
use crate::state::AppState;

/// Session cookie scoped to the admin area
fn session_cookie(value: String, max_age: time::Duration) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path(ADMIN_PATH)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .build()
}

/// Login form
///
/// GET /admin/login
pub async fn login_page(HxRequest(fragment): HxRequest) -> Page<LoginPageResponse> {
    Page::new(fragment, LoginPageResponse::default())
}

/// Check credentials and open a session
///
/// POST /admin/login
///
/// Wrong credentials re-render the form with an error (still 200).
pub async fn login(
    State(state): State<AppState>,
    HxRequest(fragment): HxRequest,
    jar: CookieJar,
    Form(request): Form<LoginRequest>,
) -> ApiResult<Response> {
    match AuthService::new(state.service_context()).login(request).await {
        Ok(session) => {
            let cookie = session_cookie(
                session.token.into_inner(),
                time::Duration::days(SESSION_TTL_DAYS),
            );
            Ok((jar.add(cookie), [(HX_REDIRECT, ADMIN_PATH)]).into_response())
        }
        Err(ServiceError::App(err @ AppError::InvalidCredentials)) => Ok(Page::new(
            fragment,
            LoginPageResponse::with_error(err.to_string()),
        )
        .into_response()),
        Err(e) => Err(ApiError::from(e)),
    }
}

/// Drop the session and clear the cookie
///
/// POST /admin/logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let token = jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_string());
    AuthService::new(state.service_context())
        .logout(token.as_deref())
        .await;

    let removal = session_cookie(String::new(), time::Duration::ZERO);
    (jar.add(removal), Redirect::to(LOGIN_PATH))
}
