//! SQLite connection pool management
//!
//! The pool holds a single connection. SQLite serializes writers anyway, and
//! one connection keeps "database is locked" out of concurrent handlers.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

const IN_MEMORY: &str = ":memory:";

/// Database configuration for connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path of the database file, or `:memory:`
    pub path: String,
    /// How long a statement waits on a locked database
    pub busy_timeout: Duration,
    /// Maximum time to wait for the pooled connection
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from("db/portfolio.db"),
            busy_timeout: Duration::from_secs(5),
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

impl DatabaseConfig {
    /// Config for a database file at `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Config for a private in-memory database
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }

    /// Whether this config points at an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }
}

/// Create a new SQLite connection pool
///
/// Creates the database file and its parent directory when missing.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = if config.is_in_memory() {
        SqliteConnectOptions::from_str("sqlite::memory:")?
    } else {
        if let Some(parent) = Path::new(&config.path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
    };

    let options = options
        .foreign_keys(true)
        .busy_timeout(config.busy_timeout);

    // An in-memory database lives exactly as long as its connection, so the
    // connection must never be reaped.
    SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}
