//! Represents a validated email address.
//!
//! This module provides a type-safe wrapper around email addresses that
//! ensures they meet standard email format requirements. It uses the
//! validator crate to perform validation according to HTML5 email
//! specifications.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::ValidationError;

/// A validated email address that is guaranteed to meet format
/// requirements. This type can only be constructed through validation,
/// ensuring that any instance is a properly formatted email address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Email(String);

impl Email {
    /// Creates a new `Email` after validating the provided string.
    ///
    /// The address is trimmed of surrounding whitespace and validated
    /// against HTML5 email format requirements. Every failure mode —
    /// empty input, overlong input, malformed shape — reports
    /// [`ValidationError::InvalidEmail`].
    ///
    /// # Example
    /// ```
    /// use fieldcheck::Email;
    ///
    /// let email = Email::new("user@example.com").unwrap();
    /// assert!(Email::new("not-an-email").is_err());
    /// ```
    pub fn new(email: &str) -> Result<Self, ValidationError> {
        let trimmed = email.trim();

        // 254 octets is the practical upper bound for a deliverable address
        if trimmed.len() > 254 {
            debug!("email validation failed: input exceeds 254 bytes");
            return Err(ValidationError::InvalidEmail);
        }

        if !trimmed.validate_email() {
            debug!("email validation failed: malformed address");
            return Err(ValidationError::InvalidEmail);
        }

        // Convert to lowercase for consistency
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Returns a string slice of the validated email address
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Email {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allows using Email wherever a string reference is needed
impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
