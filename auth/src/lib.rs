//! Authentication utilities library
//!
//! Provides the credential primitives for the identity service:
//! - Password hashing (Argon2id, keyed with a process-wide pepper)
//! - Bearer token issuance and verification (JWT)
//!
//! Both components are pure functions of their inputs plus configuration
//! loaded once at startup, so a single instance can be shared across any
//! number of concurrent requests without locking.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new("process-wide-pepper", 2).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new("secret_key_at_least_32_bytes_long!", Duration::hours(24)).unwrap();
//! let token = tokens.issue(42).unwrap();
//! assert_eq!(tokens.verify(&token), Some(42));
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
