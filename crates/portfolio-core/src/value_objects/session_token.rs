//! Session token - 256 random bits, hex encoded
//!
//! Tokens are opaque to clients. They are generated from the operating
//! system CSPRNG and never derived from user input.

use rand::{rngs::OsRng, RngCore};
use std::fmt;

/// Number of random bytes in a token
const TOKEN_BYTES: usize = 32;

/// Opaque admin session identifier
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Length of the hex representation
    pub const ENCODED_LEN: usize = TOKEN_BYTES * 2;

    /// Generate a fresh token
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// Parse a token received from a client
    ///
    /// Only 64-character lowercase hex strings are accepted, so malformed
    /// cookies can be rejected without touching the store.
    pub fn parse(s: &str) -> Result<Self, SessionTokenParseError> {
        let well_formed = s.len() == Self::ENCODED_LEN
            && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if well_formed {
            Ok(Self(s.to_string()))
        } else {
            Err(SessionTokenParseError::InvalidFormat)
        }
    }

    /// Borrow the encoded token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the encoded token
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when parsing a session token
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionTokenParseError {
    #[error("invalid session token format")]
    InvalidFormat,
}

// Never print the secret itself
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({}…)", self.0.get(..8).unwrap_or_default())
    }
}

impl std::str::FromStr for SessionToken {
    type Err = SessionTokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
