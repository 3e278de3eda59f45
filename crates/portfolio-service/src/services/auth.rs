//! Authentication service
//!
//! Handles admin login, logout, session checks and expired-session cleanup.

use portfolio_common::{session_ttl, AppError};
use portfolio_core::{Session, SessionToken};
use tracing::{debug, info, instrument, warn};

use crate::dto::LoginRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check the admin credentials and open a session
    ///
    /// # Errors
    /// `AppError::InvalidCredentials` when either field does not match.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<Session> {
        if !self
            .ctx
            .credentials()
            .verify(&request.username, &request.password)
        {
            warn!("Login failed: invalid credentials");
            return Err(AppError::InvalidCredentials.into());
        }

        let session = self.ctx.session_repo().create(session_ttl()).await?;
        info!(expires_at = %session.expires_at, "Admin logged in");
        Ok(session)
    }

    /// Drop the server-side session, if any
    ///
    /// Never fails: the cookie is cleared either way.
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: Option<&str>) {
        let Some(token) = token.and_then(|raw| SessionToken::parse(raw).ok()) else {
            debug!("Logout without a usable session cookie");
            return;
        };

        match self.ctx.session_repo().delete(&token).await {
            Ok(()) => info!("Admin logged out"),
            Err(e) => warn!(error = %e, "Failed to delete session on logout"),
        }
    }

    /// Whether the cookie value names a live session
    ///
    /// Malformed tokens and store failures count as unauthenticated.
    #[instrument(skip(self, token))]
    pub async fn is_authenticated(&self, token: Option<&str>) -> bool {
        let Some(raw) = token else {
            return false;
        };
        let Ok(token) = SessionToken::parse(raw) else {
            debug!("Rejected malformed session token");
            return false;
        };

        match self.ctx.session_repo().is_valid(&token).await {
            Ok(valid) => valid,
            Err(e) => {
                warn!(error = %e, "Session lookup failed");
                false
            }
        }
    }

    /// Delete every expired session, returning how many were removed
    #[instrument(skip(self))]
    pub async fn purge_expired_sessions(&self) -> ServiceResult<u64> {
        let removed = self.ctx.session_repo().purge_expired().await?;
        if removed > 0 {
            info!(removed, "Purged expired sessions");
        }
        Ok(removed)
    }
}
