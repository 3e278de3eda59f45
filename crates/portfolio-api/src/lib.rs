//! # portfolio-api
//!
//! HTTP server built with the Axum framework.
//!
//! Views are JSON envelopes (`{"fragment": bool, "data": ...}`) so a
//! template layer can render either a full page or an htmx partial.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, spawn_session_sweeper, start_session_sweeper};
pub use state::AppState;
