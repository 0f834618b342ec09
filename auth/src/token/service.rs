use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies the bearer tokens used by the HTTP layer.
///
/// Tokens are HS256 JWTs signed with a single process-wide secret. Every
/// successful registration, login, and privileged create mints one through
/// [`TokenService::issue`]; the auth middleware checks them through
/// [`TokenService::verify`].
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl TokenService {
    /// Create a token service from startup configuration.
    ///
    /// # Arguments
    /// * `secret` - HMAC signing secret shared by issue and verify
    /// * `lifetime` - Validity window stamped into every issued token
    ///
    /// # Errors
    /// * `EmptySecret` - The secret is the empty string
    pub fn new(secret: &str, lifetime: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
            lifetime,
        })
    }

    /// Issue a signed token identifying `user_id`, valid for the configured
    /// lifetime starting now.
    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, self.lifetime);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return the user id it was issued for.
    ///
    /// Every failure collapses to `None`: malformed input, a bad signature,
    /// an expired token, and a subject that is not a numeric id all look the
    /// same to the caller. The reason is logged at debug level only.
    pub fn verify(&self, token: &str) -> Option<i64> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => data.claims.user_id(),
            Err(e) => {
                tracing::debug!("Rejected bearer token: {e}");
                None
            }
        }
    }
}
