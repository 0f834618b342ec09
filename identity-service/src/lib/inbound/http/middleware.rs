use std::sync::Arc;

use auth::TokenService;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::UserId;

/// Response body for every rejected token, regardless of cause. A missing
/// header, a malformed header, a forged signature, and an expired token all
/// read the same to the client.
const REJECTION_MESSAGE: &str = "Token is invalid or expired";

/// Authenticated identity attached to a request after successful token
/// verification. Created per request, dropped at end of request.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub user_id: UserId,
}

/// Guard in front of the protected routes.
///
/// Extracts the bearer token from the `Authorization` header and verifies
/// it through the token service. A pure function of the request headers;
/// every protected route goes through it explicitly via
/// [`require_auth`].
pub struct AuthGate {
    token_service: Arc<TokenService>,
}

impl AuthGate {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }

    /// Authenticate a request from its headers.
    ///
    /// # Returns
    /// `Some(AuthContext)` carrying the verified user id, or `None` when
    /// the header is absent or malformed or the token fails verification.
    pub fn authenticate(&self, headers: &HeaderMap) -> Option<AuthContext> {
        let token = bearer_token(headers)?;
        let user_id = self.token_service.verify(token)?;

        Some(AuthContext {
            user_id: UserId(user_id),
        })
    }
}

/// Middleware that rejects unauthenticated requests with a uniform 403 and
/// adds the authenticated identity to request extensions.
pub async fn require_auth(
    State(gate): State<Arc<AuthGate>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(context) = gate.authenticate(req.headers()) else {
        tracing::warn!(uri = %req.uri(), "Rejected request with missing or invalid token");
        return Err((
            StatusCode::FORBIDDEN,
            Json(json!({
                "error": REJECTION_MESSAGE
            })),
        )
            .into_response());
    };

    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
