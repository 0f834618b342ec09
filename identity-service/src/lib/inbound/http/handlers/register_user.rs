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

pub async fn register_user<S: UserStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<ApiSuccess<RegisterUserResponseData>, ApiError> {
    state
        .user_directory
        .register(body.try_into_credential()?)
        .await
        .map_err(ApiError::from)
        .map(|ref registration| ApiSuccess::new(StatusCode::CREATED, registration.into()))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterUserRequest {
    first_name: String,
    last_name: String,
    password: String,
}

impl RegisterUserRequest {
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
pub struct RegisterUserResponseData {
    pub user: UserData,
    pub token: String,
}

impl From<&Registration> for RegisterUserResponseData {
    fn from(registration: &Registration) -> Self {
        Self {
            user: (&registration.user).into(),
            token: registration.token.clone(),
        }
    }
}
