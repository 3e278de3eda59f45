//! Value objects - immutable types that represent domain concepts

mod proficiency;
mod session_token;

pub use proficiency::{Proficiency, ProficiencyError};
pub use session_token::{SessionToken, SessionTokenParseError};
