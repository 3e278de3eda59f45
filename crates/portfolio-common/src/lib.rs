//! # portfolio-common
//!
//! Shared utilities including configuration, error handling, admin authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    session_ttl, AdminCredentials, ADMIN_PATH, LOGIN_PATH, SESSION_COOKIE, SESSION_TTL_DAYS,
};
pub use config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, DatabaseSettings, Environment,
    RateLimitConfig, ServerConfig, SessionConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{try_init_tracing_with_config, TracingConfig, TracingError};
