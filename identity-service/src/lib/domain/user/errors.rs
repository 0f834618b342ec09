use thiserror::Error;

/// Error for strong-password policy violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain a lowercase letter")]
    MissingLowercase,

    #[error("Password must contain an uppercase letter")]
    MissingUppercase,

    #[error("Password must contain a digit")]
    MissingDigit,

    #[error("Password must contain a symbol")]
    MissingSymbol,
}

/// Top-level error for all user-related operations.
///
/// `WrongCredentials` deliberately covers both an unknown name pair and a
/// failed password check: the two causes must stay indistinguishable to the
/// caller so login responses cannot be used to enumerate accounts.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("wrong credentials")]
    WrongCredentials,

    #[error("Couldn't find a user with the provided id")]
    NotFound,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuanceFailed(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<auth::PasswordError> for UserError {
    fn from(err: auth::PasswordError) -> Self {
        UserError::HashingFailed(err.to_string())
    }
}

impl From<auth::TokenError> for UserError {
    fn from(err: auth::TokenError) -> Self {
        UserError::TokenIssuanceFailed(err.to_string())
    }
}
