//! Error type for the validation system.
//!
//! Every rule failure maps to one variant with a fixed, user-presentable
//! message as its `Display` output. The caller decides how to surface it.

use thiserror::Error;

/// A constraint violation reported by one of the validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Password must be less than 100 characters")]
    PasswordTooLong,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Name must be less than 50 characters")]
    NameTooLong,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_presentable() {
        let cases = vec![
            (ValidationError::InvalidEmail, "Invalid email address"),
            (
                ValidationError::PasswordTooShort,
                "Password must be at least 6 characters",
            ),
            (
                ValidationError::PasswordTooLong,
                "Password must be less than 100 characters",
            ),
            (ValidationError::NameTooShort, "Name must be at least 2 characters"),
            (ValidationError::NameTooLong, "Name must be less than 50 characters"),
        ];

        for (error, message) in cases {
            assert_eq!(error.to_string(), message);
        }
    }
}
