use std::fmt;

use crate::user::errors::PasswordPolicyError;

/// User aggregate entity.
///
/// Represents a registered user. `password_hash` is only ever produced by
/// the password hasher; the plaintext never reaches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

/// User unique identifier type.
///
/// Assigned by the store on insert and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Insert shape for a new user. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

/// Plaintext login/registration credential.
///
/// Transient: exists only for the duration of a register, login, or create
/// call and is dropped once the password has been hashed or verified. Never
/// persisted.
#[derive(Clone)]
pub struct Credential {
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The plaintext must not leak through logs.
        f.debug_struct("Credential")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a successful registration or privileged create.
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: User,
    pub token: String,
}

/// Password accepted by the strong-password policy.
///
/// Required for register and create; login accepts any string so that the
/// policy can be tightened without locking out existing accounts.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;

    /// Validate a raw password against the strong-password policy.
    ///
    /// # Arguments
    /// * `password` - Raw password string
    ///
    /// # Returns
    /// Validated Password value object
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 8 characters
    /// * `MissingLowercase` - No lowercase letter
    /// * `MissingUppercase` - No uppercase letter
    /// * `MissingDigit` - No digit
    /// * `MissingSymbol` - No non-alphanumeric character
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if !password.chars().any(|c| c.is_lowercase()) {
            return Err(PasswordPolicyError::MissingLowercase);
        }
        if !password.chars().any(|c| c.is_uppercase()) {
            return Err(PasswordPolicyError::MissingUppercase);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }
        if !password.chars().any(|c| !c.is_alphanumeric()) {
            return Err(PasswordPolicyError::MissingSymbol);
        }
        Ok(Self(password))
    }

    /// Consume the value object and return the raw password for hashing.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
