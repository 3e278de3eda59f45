//! Configuration structs

mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, DatabaseSettings, Environment,
    RateLimitConfig, ServerConfig, SessionConfig,
};
