//! Route handlers
//!
//! Public pages, admin authentication, admin CRUD, and health probes.

pub mod about;
pub mod admin;
pub mod auth;
pub mod blog;
pub mod health;
pub mod projects;
