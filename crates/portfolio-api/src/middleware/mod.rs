//! Middleware stack for the server
//!
//! Provides request ids, tracing, timeouts, compression, login rate
//! limiting, and the admin session gate.

mod auth;

pub use auth::require_session;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::MethodRouter,
    Router,
};
use portfolio_common::RateLimitConfig;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    compression::CompressionLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Apply the shared middleware stack
///
/// `ServiceBuilder` runs layers top to bottom: request id, propagation,
/// tracing, timeout, compression.
pub fn apply_middleware(router: Router<AppState>) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            // Request ID
            .layer(SetRequestIdLayer::new(
                header::HeaderName::from_static(REQUEST_ID_HEADER),
                MakeRequestUuid,
            ))
            .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            // Tracing
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get(REQUEST_ID_HEADER)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("unknown");

                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    })
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            // Timeout (returns 503 Service Unavailable on timeout)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                Duration::from_secs(30),
            ))
            .layer(CompressionLayer::new()),
    )
}

/// Rate limit the login form
///
/// The quota is global rather than per client IP; there is one admin.
/// An unusable quota leaves the route unlimited.
pub fn with_login_rate_limit(
    route: MethodRouter<AppState>,
    config: &RateLimitConfig,
) -> MethodRouter<AppState> {
    // One request replenished every `period_ms`
    let governor_conf = 1000_u64
        .checked_div(config.requests_per_second)
        .and_then(|period_ms| {
            GovernorConfigBuilder::default()
                .per_millisecond(period_ms)
                .burst_size(config.burst)
                .key_extractor(GlobalKeyExtractor)
                .finish()
        });

    match governor_conf {
        Some(conf) => route.layer(GovernorLayer {
            config: Arc::new(conf),
        }),
        None => {
            warn!(
                requests_per_second = config.requests_per_second,
                burst = config.burst,
                "Invalid login rate limit; limiting disabled"
            );
            route
        }
    }
}
