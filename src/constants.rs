//! Constants used throughout the validation system

/// Minimum length for a password
pub const PASSWORD_MIN_LENGTH: usize = 6;
/// Maximum length for a password
pub const PASSWORD_MAX_LENGTH: usize = 100;
/// Minimum length for a name
pub const NAME_MIN_LENGTH: usize = 2;
/// Maximum length for a name
pub const NAME_MAX_LENGTH: usize = 50;
