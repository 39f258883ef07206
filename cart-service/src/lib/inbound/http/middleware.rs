use std::fmt;

use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use super::handlers::ApiErrorData;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified token subject into handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub subject: String,
}

/// Why a bearer token was refused.
///
/// Logged for operators; clients always get the same 401 body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRejection {
    MissingHeader,
    InvalidHeader,
    Invalid(auth::JwtError),
}

impl TokenRejection {
    pub fn reason(&self) -> &'static str {
        match self {
            TokenRejection::MissingHeader => "missing_header",
            TokenRejection::InvalidHeader => "invalid_header",
            TokenRejection::Invalid(e) => e.reason(),
        }
    }
}

impl fmt::Display for TokenRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenRejection::MissingHeader => f.write_str("Missing Authorization header"),
            TokenRejection::InvalidHeader => {
                f.write_str("Authorization header is not of the form `Bearer <token>`")
            }
            TokenRejection::Invalid(e) => e.fmt(f),
        }
    }
}

impl IntoResponse for TokenRejection {
    fn into_response(self) -> Response {
        tracing::warn!(reason = self.reason(), error = %self, "Token rejected");

        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(ApiErrorData {
                detail: "Invalid token".to_string(),
            }),
        )
            .into_response()
    }
}

/// Middleware that validates the bearer token before any cart handler runs
/// and stores the subject in request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, TokenRejection> {
    let token = extract_bearer_token(&req)?;

    let subject = state
        .authenticator
        .verify_token(token)
        .map_err(TokenRejection::Invalid)?;

    req.extensions_mut().insert(AuthenticatedUser { subject });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, TokenRejection> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(TokenRejection::MissingHeader)?
        .to_str()
        .map_err(|_| TokenRejection::InvalidHeader)?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or(TokenRejection::InvalidHeader)?;

    if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
        return Err(TokenRejection::InvalidHeader);
    }

    Ok(token.trim())
}
