use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// The application's error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Login with an unknown email or a wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration with an email that is already taken.
    #[error("User already exists")]
    DuplicateUser,

    /// A missing or invalid session token.
    #[error("Unauthorized")]
    Unauthorized,

    /// A resource that is absent or not owned by the caller.
    ///
    /// Ownership failures are reported as not-found so the response never
    /// reveals whether another user's resource exists.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// A `Result` type that uses `AppError` as the error type.
pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidCredentials => {
                tracing::warn!("Login failed: invalid credentials");
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }

            AppError::DuplicateUser => {
                tracing::debug!("Registration rejected: user already exists");
                (StatusCode::BAD_REQUEST, "User already exists".to_string())
            }

            AppError::Unauthorized => {
                tracing::warn!("Authorization failed");
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }

            AppError::NotFound(resource) => {
                tracing::debug!("{} not found", resource);
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }

            AppError::Validation(ref msg) => {
                tracing::debug!("Validation error: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }

            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = sonic_rs::to_string(&sonic_rs::json!({
            "error": message
        }))
        .unwrap_or_else(|_| r#"{"error":"Internal server error"}"#.to_string());

        (
            status,
            [(http::header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response()
    }
}
