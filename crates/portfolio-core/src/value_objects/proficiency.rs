//! Skill proficiency - an integer percentage between 0 and 100

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// How well a skill is known, as a percentage (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Proficiency(u8);

impl Proficiency {
    /// Highest allowed value
    pub const MAX: u8 = 100;

    /// Create a proficiency, rejecting values above 100
    pub fn new(value: u8) -> Result<Self, ProficiencyError> {
        if value > Self::MAX {
            return Err(ProficiencyError::OutOfRange(i64::from(value)));
        }
        Ok(Self(value))
    }

    /// Get the inner value
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Error returned for values outside 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProficiencyError {
    #[error("proficiency must be between 0 and 100, got {0}")]
    OutOfRange(i64),
}

impl TryFrom<i64> for Proficiency {
    type Error = ProficiencyError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| ProficiencyError::OutOfRange(value))
            .and_then(Self::new)
    }
}

impl From<Proficiency> for i64 {
    fn from(p: Proficiency) -> Self {
        i64::from(p.0)
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Serialize for Proficiency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Proficiency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Proficiency::new(0).unwrap().value(), 0);
        assert_eq!(Proficiency::new(100).unwrap().value(), 100);
        assert!(Proficiency::new(101).is_err());
    }

    #[test]
    fn test_try_from_i64() {
        assert_eq!(Proficiency::try_from(60).unwrap().value(), 60);
        assert_eq!(
            Proficiency::try_from(-1),
            Err(ProficiencyError::OutOfRange(-1))
        );
        assert_eq!(
            Proficiency::try_from(300),
            Err(ProficiencyError::OutOfRange(300))
        );
    }

    #[test]
    fn test_serde() {
        let p = Proficiency::new(85).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "85");
        let back: Proficiency = serde_json::from_str("85").unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Proficiency>("150").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Proficiency::new(42).unwrap().to_string(), "42%");
    }
}
