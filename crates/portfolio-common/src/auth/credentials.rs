//! Admin credential check
//!
//! There is a single admin account whose username and password come from
//! configuration. Both fields are always compared in full so the response
//! time does not reveal which one was wrong or how much of it matched.

use std::fmt;
use std::hint::black_box;

use crate::config::AdminConfig;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Lifetime of an admin session
pub const SESSION_TTL_DAYS: i64 = 7;

/// Root of the admin area; the session cookie is scoped to it
pub const ADMIN_PATH: &str = "/admin";

/// Where unauthenticated admin requests are sent
pub const LOGIN_PATH: &str = "/admin/login";

/// Session lifetime as a duration
#[must_use]
pub fn session_ttl() -> chrono::Duration {
    chrono::Duration::days(SESSION_TTL_DAYS)
}

/// Configured admin credentials
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check submitted credentials against the configured ones
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = constant_time_eq(username.as_bytes(), self.username.as_bytes());
        let pass_ok = constant_time_eq(password.as_bytes(), self.password.as_bytes());
        // `&` evaluates both sides
        user_ok & pass_ok
    }
}

impl From<&AdminConfig> for AdminCredentials {
    fn from(config: &AdminConfig) -> Self {
        Self::new(config.username.clone(), config.password.clone())
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Compare every byte regardless of where the first mismatch is
///
/// `diff` passes through `black_box` so the loop cannot exit early.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff = black_box(diff | (x ^ y));
    }
    black_box(diff) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_constant_time_eq_checks_every_position() {
        let secret = b"correct-horse-battery-staple";
        for i in 0..secret.len() {
            let mut guess = *secret;
            guess[i] ^= 0x01;
            assert!(!constant_time_eq(secret, &guess), "mismatch at {i} missed");
        }
    }

    #[test]
    fn test_verify() {
        let creds = AdminCredentials::new("admin", "s3cret");
        assert!(creds.verify("admin", "s3cret"));
        assert!(!creds.verify("admin", "wrong"));
        assert!(!creds.verify("root", "s3cret"));
        assert!(!creds.verify("", ""));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = AdminCredentials::new("admin", "s3cret");
        assert!(!format!("{creds:?}").contains("s3cret"));
    }

    #[test]
    fn test_session_ttl() {
        assert_eq!(session_ttl().num_seconds(), 604_800);
    }
}
