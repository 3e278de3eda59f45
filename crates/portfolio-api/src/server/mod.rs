//! Server setup and initialization
//!
//! Provides the application builder, the session sweeper, and the server
//! runner.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use portfolio_common::{AdminCredentials, AppConfig, AppError, AppResult};
use portfolio_db::{create_pool, run_migrations, seed_if_empty, DatabaseConfig};
use portfolio_service::services::AuthService;
use portfolio_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router(&state);
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Open the database, create the schema, seed it, and build AppState
///
/// A schema failure is fatal. A seeding failure is logged and ignored.
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    info!(path = %config.database.path, "Opening SQLite database...");
    let pool = create_pool(&DatabaseConfig::new(config.database.path.clone()))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create schema: {e}")))?;
    info!("Database schema ready");

    if config.seed_database {
        match seed_if_empty(&pool).await {
            Ok(true) => info!("Seeded empty database with demo content"),
            Ok(false) => debug!("Database already has content; skipping seed"),
            Err(e) => warn!(error = %e, "Seeding failed"),
        }
    }

    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .credentials(AdminCredentials::from(&config.admin))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Purge expired sessions once, logging failures
async fn sweep_sessions(ctx: &ServiceContext) {
    if let Err(e) = AuthService::new(ctx).purge_expired_sessions().await {
        warn!(error = %e, "Session purge failed");
    }
}

/// Purge expired sessions now and then every `interval`
pub fn spawn_session_sweeper(ctx: Arc<ServiceContext>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            sweep_sessions(&ctx).await;
            tokio::time::sleep(interval).await;
        }
    })
}

/// Start session expiry handling for a purge interval in seconds
///
/// An interval of 0 purges once before returning and spawns nothing.
pub async fn start_session_sweeper(
    ctx: Arc<ServiceContext>,
    interval_secs: u64,
) -> Option<JoinHandle<()>> {
    if interval_secs == 0 {
        sweep_sessions(&ctx).await;
        return None;
    }
    Some(spawn_session_sweeper(ctx, Duration::from_secs(interval_secs)))
}

/// Run the HTTP server
pub async fn run_server(app: Router, listener: TcpListener) -> AppResult<()> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read listener address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(AppError::internal)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let address = config.server.address();
    let purge_interval = config.session.purge_interval_secs;

    let state = create_app_state(config).await?;

    let _sweeper = start_session_sweeper(state.shared_context(), purge_interval).await;

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))?;

    run_server(create_app(state), listener).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    async fn context() -> Arc<ServiceContext> {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let ctx = ServiceContextBuilder::new()
            .pool(pool)
            .credentials(AdminCredentials::new("admin", "hunter2"))
            .build()
            .unwrap();
        Arc::new(ctx)
    }

    async fn session_rows(ctx: &ServiceContext) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM sessions")
            .fetch_one(ctx.pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_zero_interval_purges_once_without_spawning() {
        let ctx = context().await;
        let repo = ctx.session_repo();
        repo.create(ChronoDuration::seconds(-5)).await.unwrap();
        let live = repo.create(ChronoDuration::days(7)).await.unwrap();

        let handle = start_session_sweeper(Arc::clone(&ctx), 0).await;

        assert!(handle.is_none());
        assert_eq!(session_rows(&ctx).await, 1);
        assert!(ctx.session_repo().is_valid(&live.token).await.unwrap());
    }

    #[tokio::test]
    async fn test_sweeper_keeps_purging_on_interval() {
        let ctx = context().await;
        ctx.session_repo()
            .create(ChronoDuration::seconds(-5))
            .await
            .unwrap();

        let handle = spawn_session_sweeper(Arc::clone(&ctx), Duration::from_millis(20));
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(session_rows(&ctx).await, 0);

        // Expires after the first pass; a later pass must remove it
        ctx.session_repo()
            .create(ChronoDuration::seconds(-5))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(session_rows(&ctx).await, 0);

        handle.abort();
    }

    #[tokio::test]
    async fn test_nonzero_interval_spawns_sweeper() {
        let ctx = context().await;
        let handle = start_session_sweeper(ctx, 3600).await;

        let handle = handle.expect("sweeper task");
        assert!(!handle.is_finished());
        handle.abort();
    }
}
