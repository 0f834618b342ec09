use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by every bearer token this service issues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the authenticated user. RFC 7519 requires `sub` to be
    /// a string, so the numeric id is stringified here and parsed back on
    /// verification.
    pub sub: String,
    /// Unix timestamp the token was issued at.
    pub iat: i64,
    /// Unix timestamp after which the token is rejected.
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: i64, lifetime: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        }
    }

    /// Numeric user id carried by the token, if `sub` holds one.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_carry_the_user_id() {
        let claims = Claims::new(42, Duration::hours(24));

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id(), Some(42));
    }

    #[test]
    fn test_expiry_matches_the_lifetime() {
        let claims = Claims::new(1, Duration::hours(24));

        assert_eq!(claims.exp - claims.iat, Duration::hours(24).num_seconds());
    }

    #[test]
    fn test_non_numeric_subject_has_no_user_id() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            iat: 0,
            exp: 0,
        };

        assert_eq!(claims.user_id(), None);
    }
}
