//! Response types and error handling for handlers
//!
//! Provides unified error handling plus the htmx-aware view envelopes.

mod error;
mod htmx;

pub use error::{ApiError, ApiResult, ErrorBody, ErrorDetail};
pub use htmx::{
    refresh_event, Page, Triggered, HX_REDIRECT, HX_REQUEST, HX_TRIGGER,
};
