//! Axum extractors for request handling
//!
//! Custom extractors for htmx detection, path ids, and validated forms.

mod htmx;
mod path;
mod validated;

pub use htmx::{is_fragment_request, HxRequest};
pub use path::IdPath;
pub use validated::ValidatedForm;
