//! Admin authentication utilities

mod credentials;

pub use credentials::{
    session_ttl, AdminCredentials, ADMIN_PATH, LOGIN_PATH, SESSION_COOKIE, SESSION_TTL_DAYS,
};
