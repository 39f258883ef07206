use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::credential::ports::CredentialServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    state
        .credential_service
        .login(&body.username, &body.password)
        .await
        .map_err(|e| {
            tracing::info!(username = %body.username, "Login rejected");
            ApiError::from(e)
        })
        .map(|token| {
            ApiSuccess::new(
                StatusCode::OK,
                LoginResponseData {
                    access_token: token.token,
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
}
