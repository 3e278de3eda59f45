//! Route definitions
//!
//! Public pages, the ungated login routes, and the gated admin area.

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::handlers::{about, admin, auth, blog, health, projects};
use crate::middleware::{require_session, with_login_rate_limit};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(public_routes())
        .merge(login_routes(state))
        .merge(admin_routes(state))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Public pages and htmx partials
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(about::index))
        .route("/projects", get(projects::list))
        .route("/blog", get(blog::list))
        .route("/blog/:slug", get(blog::show))
        .route("/api/skills", get(about::skills))
        .route("/api/skills/:id", get(about::skill_detail))
        .route("/api/projects/:id/expand", get(projects::expand))
        .route("/api/projects/:id/collapse", get(projects::collapse))
}

/// Login and logout; reachable without a session
fn login_routes(state: &AppState) -> Router<AppState> {
    let login = with_login_rate_limit(post(auth::login), &state.config().rate_limit);

    Router::new()
        .route("/admin/login", get(auth::login_page).merge(login))
        .route("/admin/logout", post(auth::logout))
}

/// Admin area behind the session gate
fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin::dashboard))
        // Skills
        .route("/admin/skills", get(admin::skills::list).post(admin::skills::create))
        .route("/admin/skills/new", get(admin::skills::new_form))
        .route("/admin/skills/:id/edit", get(admin::skills::edit_form))
        .route(
            "/admin/skills/:id",
            put(admin::skills::update).delete(admin::skills::delete),
        )
        // Categories
        .route(
            "/admin/categories",
            get(admin::categories::list).post(admin::categories::create),
        )
        .route(
            "/admin/categories/:id",
            put(admin::categories::update).delete(admin::categories::delete),
        )
        // Projects
        .route(
            "/admin/projects",
            get(admin::projects::list).post(admin::projects::create),
        )
        .route("/admin/projects/new", get(admin::projects::new_form))
        .route("/admin/projects/:id/edit", get(admin::projects::edit_form))
        .route(
            "/admin/projects/:id",
            put(admin::projects::update).delete(admin::projects::delete),
        )
        // Experiences
        .route(
            "/admin/experiences",
            get(admin::experiences::list).post(admin::experiences::create),
        )
        .route("/admin/experiences/new", get(admin::experiences::new_form))
        .route(
            "/admin/experiences/:id/edit",
            get(admin::experiences::edit_form),
        )
        .route(
            "/admin/experiences/:id",
            put(admin::experiences::update).delete(admin::experiences::delete),
        )
        // Education
        .route(
            "/admin/education",
            get(admin::education::list).post(admin::education::create),
        )
        .route("/admin/education/new", get(admin::education::new_form))
        .route("/admin/education/:id/edit", get(admin::education::edit_form))
        .route(
            "/admin/education/:id",
            put(admin::education::update).delete(admin::education::delete),
        )
        // Blog
        .route("/admin/blog", get(admin::blog::list).post(admin::blog::create))
        .route("/admin/blog/new", get(admin::blog::new_form))
        .route("/admin/blog/:id/edit", get(admin::blog::edit_form))
        .route(
            "/admin/blog/:id",
            put(admin::blog::update).delete(admin::blog::delete),
        )
        .route_layer(from_fn_with_state(state.clone(), require_session))
}
