//! HTTP mapping of the crate error.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::error;

use crate::auth::error::AuthError;
use crate::prelude::*;

pub const MISSING_TOKEN: &str = "Missing token";
pub const INVALID_TOKEN: &str = "Invalid token";
pub const INVALID_CREDENTIALS: &str = "invalid username or password";

impl Error {
    /// Status code and client facing message.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        let (status, message) = match self {
            Error::InvalidPayload(reason) | Error::InvalidPath(reason) => {
                return (StatusCode::BAD_REQUEST, reason.clone());
            }
            Error::MissingCredentials => (StatusCode::BAD_REQUEST, "Missing credentials"),
            Error::MissingTitle => (StatusCode::BAD_REQUEST, "Missing title"),

            Error::WrongCredentials => (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS),
            Error::Auth(AuthError::TokenMissing) => (StatusCode::UNAUTHORIZED, MISSING_TOKEN),
            Error::Auth(
                AuthError::MalformedHeader | AuthError::InvalidToken | AuthError::TokenExpired,
            ) => (StatusCode::UNAUTHORIZED, INVALID_TOKEN),

            Error::TodoNotFound => (StatusCode::NOT_FOUND, "Todo not found"),

            Error::UserCreation => (StatusCode::INTERNAL_SERVER_ERROR, "Can not create user"),
            Error::Auth(AuthError::PasswordHash(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Can not hash password")
            }
            Error::Auth(AuthError::TokenCreation(_) | AuthError::SecretMissing) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Can not create token")
            }
            Error::IO(_)
            | Error::Join(_)
            | Error::R2D2(_)
            | Error::Diesel(_)
            | Error::Migration(_)
            | Error::Config(_)
            | Error::CtxMissing
            | Error::StorePoisoned => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };
        (status, String::from(message))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!("Creating API error response for error: {:?}", self);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidPayload(value.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(value: PathRejection) -> Self {
        Self::InvalidPath(value.body_text())
    }
}
