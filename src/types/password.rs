//! Represents a validated password.
//!
//! The wrapper enforces length bounds only; it never normalizes the input,
//! since whitespace and exotic characters are significant in passwords.
//! The inner value is kept out of `Debug` output and serde entirely so it
//! cannot leak through logs or serialized DTOs.

use std::fmt;

use log::debug;

use crate::constants::{PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};
use crate::error::ValidationError;

/// A password that satisfies the length bounds. Construction is the only
/// way to obtain one.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Validates the provided string and wraps it, taking it verbatim.
    ///
    /// Bounds are checked in order: minimum first, then maximum.
    ///
    /// # Example
    /// ```
    /// use fieldcheck::{Password, ValidationError};
    ///
    /// assert!(Password::new("hunter2").is_ok());
    /// assert_eq!(Password::new("abc"), Err(ValidationError::PasswordTooShort));
    /// ```
    pub fn new(password: &str) -> Result<Self, ValidationError> {
        if password.len() < PASSWORD_MIN_LENGTH {
            debug!("password validation failed: below minimum length");
            return Err(ValidationError::PasswordTooShort);
        }

        if password.len() > PASSWORD_MAX_LENGTH {
            debug!("password validation failed: above maximum length");
            return Err(ValidationError::PasswordTooLong);
        }

        Ok(Self(password.to_owned()))
    }

    /// Returns the validated password. Handle with care.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Password {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Password {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// No Display, and a Debug that never prints the inner value.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_boundaries() {
        let cases = vec![
            ("a".repeat(5), false),
            ("a".repeat(6), true),
            ("a".repeat(100), true),
            ("a".repeat(101), false),
        ];

        for (password, expected_valid) in cases {
            assert_eq!(
                Password::new(&password).is_ok(),
                expected_valid,
                "Password of length {} validation result was unexpected",
                password.len()
            );
        }
    }

    #[test]
    fn test_too_short_message() {
        let result = Password::new("abc");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_too_long_message() {
        let result = Password::new(&"a".repeat(101));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Password must be less than 100 characters"
        );
    }

    #[test]
    fn test_taken_verbatim() {
        // Leading and trailing whitespace is part of the password
        let password = Password::new("  secret  ").unwrap();
        assert_eq!(password.as_str(), "  secret  ");
    }

    #[test]
    fn test_debug_redacts() {
        let password = Password::new("hunter2!").unwrap();
        let rendered = format!("{:?}", password);
        assert!(!rendered.contains("hunter2"), "Debug leaked the password");
        assert_eq!(rendered, "Password(\"<redacted>\")");
    }
}
