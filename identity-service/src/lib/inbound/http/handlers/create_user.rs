use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::Credential;
use crate::domain::user::models::Password;
use crate::domain::user::models::Registration;
use crate::inbound::http::router::AppState;
use crate::user::errors::PasswordPolicyError;
use crate::user::ports::UserStore;

/// Privileged create. The auth middleware has already verified the caller;
/// the token in the response identifies the newly created account.
pub async fn create_user<S: UserStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<CreateUserRequest>,
) -> Result<ApiSuccess<CreateUserResponseData>, ApiError> {
    state
        .user_directory
        .create(body.try_into_credential()?)
        .await
        .map_err(ApiError::from)
        .map(|ref registration| ApiSuccess::new(StatusCode::CREATED, registration.into()))
}

/// HTTP request body for creating a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    first_name: String,
    last_name: String,
    password: String,
}

impl CreateUserRequest {
    fn try_into_credential(self) -> Result<Credential, PasswordPolicyError> {
        let password = Password::new(self.password)?;
        Ok(Credential {
            first_name: self.first_name,
            last_name: self.last_name,
            password: password.into_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserResponseData {
    pub user: UserData,
    pub token: String,
}

impl From<&Registration> for CreateUserResponseData {
    fn from(registration: &Registration) -> Self {
        Self {
            user: (&registration.user).into(),
            token: registration.token.clone(),
        }
    }
}
