use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failure talking to the backing store. Wrapped rather than exposed so
/// handlers never leak driver details to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Login failed. Covers unknown username, wrong password and a user row
    /// carrying an unrecognized role; all three produce the same response.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed or cleared session token.
    #[error("missing or invalid session token")]
    Unauthorized,

    /// The session is valid but its role does not grant this operation.
    #[error("insufficient role")]
    Forbidden,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::InvalidCredentials => json!({ "error": "Invalid credentials" }),
            AppError::Unauthorized => json!({ "error": "Missing or invalid session token" }),
            AppError::Forbidden => json!({ "error": "Forbidden" }),
            AppError::Validation(msg) => json!({ "error": msg }),
            AppError::Store(e) => {
                error!(error = %e, "store failure surfaced to caller");
                json!({ "error": "Internal server error" })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
