//! Root module for the field validation system.
//! Exposes three validated input types for composing form schemas:
//! [`Email`], [`Password`] and [`Name`].
//!
//! Each type can only be constructed through its validation rule, so
//! holding a value of one of these types proves the rule passed. On
//! failure, construction yields a [`ValidationError`] carrying a fixed,
//! user-presentable message.
//!
//! ```
//! use fieldcheck::{Email, Name, Password, ValidationError};
//!
//! let email = Email::new("user@example.com").unwrap();
//! assert_eq!(email.as_str(), "user@example.com");
//!
//! assert_eq!(Password::new("abc"), Err(ValidationError::PasswordTooShort));
//! assert!(Name::new("Al").is_ok());
//! ```

mod constants;
mod error;
mod types;

// Re-export commonly used types and functions
pub use constants::*;
pub use error::ValidationError;
pub use types::{Email, Name, Password};
