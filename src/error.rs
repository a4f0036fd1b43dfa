//! Unified error model
//! Defines the application error taxonomy and the HTTP error response shape

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input; the client must fix the request
    #[error("Validation error: {0}")]
    Validation(String),

    /// Uniqueness violation; the client must choose different input
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Login rejected. Unknown username and wrong password share this exact
    /// error so the response reveals neither which check failed nor whether
    /// the account exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, invalid or expired bearer token. Deliberately
    /// carries no detail.
    #[error("Authentication failed")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Store unreachable or connection-level failure; retriable by the caller
    #[error("Database connectivity error: {0}")]
    Connectivity(String),

    /// Statement rejected by the store. A programming defect; the raw driver
    /// text stays server-side.
    #[error("Query error: {0}")]
    Query(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Connectivity(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Query(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message. Driver and schema detail never crosses the
    /// response boundary.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Conflict(msg) => msg.clone(),
            AppError::InvalidCredentials => "Invalid username or password".to_string(),
            AppError::Unauthorized => "Authentication failed".to_string(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Connectivity(_) => "Database unavailable".to_string(),
            AppError::Query(_) => "Database error occurred".to_string(),
            AppError::Config(_) => "Configuration error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    pub fn code(&self) -> u16 {
        self.status_code().as_u16()
    }

    pub fn validation(msg: &str) -> Self {
        AppError::Validation(msg.to_string())
    }

    pub fn conflict(msg: &str) -> Self {
        AppError::Conflict(msg.to_string())
    }

    pub fn not_found(msg: &str) -> Self {
        AppError::NotFound(msg.to_string())
    }
}

/// Map driver errors onto the taxonomy. Unique violations (SQLSTATE 23505)
/// are the authoritative conflict signal; connection-level failures are
/// retriable connectivity errors; anything else the store rejected is a
/// query defect.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db_err) => {
                if db_err.code().as_deref() == Some("23505") {
                    AppError::Conflict("Resource already exists".to_string())
                } else {
                    AppError::Query(db_err.to_string())
                }
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => AppError::Connectivity(e.to_string()),
            _ => AppError::Query(e.to_string()),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(e: config::ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

/// Error response DTO
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: String,
    pub request_id: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: self.code(),
                message: self.user_message(),
                request_id,
            },
        };

        tracing::error!(
            code = self.code(),
            message = %self,
            request_id = %error_response.error.request_id,
            "Application error"
        );

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Validation("x".to_string()).code(), 400);
        assert_eq!(AppError::InvalidCredentials.code(), 401);
        assert_eq!(AppError::Unauthorized.code(), 401);
        assert_eq!(AppError::NotFound("x".to_string()).code(), 404);
        assert_eq!(AppError::Conflict("x".to_string()).code(), 409);
        assert_eq!(AppError::Connectivity("x".to_string()).code(), 503);
        assert_eq!(AppError::Query("x".to_string()).code(), 500);
    }

    #[test]
    fn test_user_message_hides_driver_detail() {
        let error: AppError = sqlx::Error::RowNotFound.into();
        let message = error.user_message();
        assert_eq!(message, "Database error occurred");
        assert!(!message.contains("sqlx"));
    }

    #[test]
    fn test_credential_message_is_generic() {
        // Same wording whether the username was unknown or the password wrong
        assert_eq!(
            AppError::InvalidCredentials.user_message(),
            "Invalid username or password"
        );
    }

    #[test]
    fn test_token_gate_message_does_not_mention_credentials() {
        // A missing or expired bearer token is not a login attempt
        assert_eq!(AppError::Unauthorized.user_message(), "Authentication failed");
    }
}
