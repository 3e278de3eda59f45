//! htmx-aware responses
//!
//! [`Page`] carries view data plus whether a partial was requested.
//! [`Triggered`] answers an admin mutation and tells the client which
//! lists to refresh.

use axum::{
    http::{header, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Set by htmx on every request it issues
pub const HX_REQUEST: HeaderName = HeaderName::from_static("hx-request");

/// Client-side redirect
pub const HX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");

/// Client-side event to fire after the swap
pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

/// View envelope: `{"fragment": bool, "data": ...}`
///
/// Responses vary on `HX-Request`, so caches keep full pages and
/// fragments apart.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub fragment: bool,
    pub data: T,
}

impl<T> Page<T> {
    pub fn new(fragment: bool, data: T) -> Self {
        Self { fragment, data }
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        let mut response = Json(self).into_response();
        response
            .headers_mut()
            .insert(header::VARY, HeaderValue::from_static("HX-Request"));
        response
    }
}

/// Refresh event fired after mutating a content type
pub fn refresh_event(resource: &str) -> &'static str {
    match resource {
        "skills" | "categories" => "refreshSkills",
        "projects" => "refreshProjects",
        "experiences" => "refreshExperiences",
        "education" => "refreshEducation",
        "blog" => "refreshBlog",
        _ => "refresh",
    }
}

/// 200 response with an `HX-Trigger` header
#[derive(Debug)]
pub struct Triggered<T> {
    pub event: &'static str,
    pub body: T,
}

impl<T> Triggered<T> {
    pub fn new(event: &'static str, body: T) -> Self {
        Self { event, body }
    }
}

impl<T: Serialize> IntoResponse for Triggered<T> {
    fn into_response(self) -> Response {
        let mut response = Json(self.body).into_response();
        response
            .headers_mut()
            .insert(HX_TRIGGER, HeaderValue::from_static(self.event));
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_sets_vary() {
        let response = Page::new(true, "about").into_response();
        assert_eq!(response.headers()[header::VARY], "HX-Request");
    }

    #[test]
    fn test_triggered_sets_event() {
        let response = Triggered::new(refresh_event("categories"), 1).into_response();
        assert_eq!(response.headers()[HX_TRIGGER], "refreshSkills");
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
