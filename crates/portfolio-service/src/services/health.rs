//! Readiness probe

use tracing::{instrument, warn};

use crate::dto::ReadinessResponse;

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    /// Create a new HealthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ping the database
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let database_ok = match sqlx::query("SELECT 1").execute(self.ctx.pool()).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Database readiness check failed");
                false
            }
        };
        ReadinessResponse::new(database_ok)
    }
}
