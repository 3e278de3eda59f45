//! Integration test utilities for the portfolio server
//!
//! This crate provides helpers for running end-to-end tests against
//! the public pages, the login flow, and the gated admin area.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
