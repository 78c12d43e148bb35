//! Represents a validated display name.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::constants::{NAME_MAX_LENGTH, NAME_MIN_LENGTH};
use crate::error::ValidationError;

/// A display name within the length bounds. The stored value is trimmed
/// and NFKC-normalized for consistent representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    /// Validates the provided string and wraps it.
    ///
    /// # Example
    /// ```
    /// use fieldcheck::Name;
    ///
    /// assert!(Name::new("Al").is_ok());
    /// assert!(Name::new("A").is_err());
    /// ```
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let trimmed = name.trim();

        if trimmed.len() < NAME_MIN_LENGTH {
            debug!("name validation failed: below minimum length");
            return Err(ValidationError::NameTooShort);
        }

        if trimmed.len() > NAME_MAX_LENGTH {
            debug!("name validation failed: above maximum length");
            return Err(ValidationError::NameTooLong);
        }

        // Normalize Unicode characters to ensure consistent representation
        let normalized = trimmed.nfkc().collect::<String>();

        Ok(Self(normalized))
    }

    /// Returns the validated name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Name {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
