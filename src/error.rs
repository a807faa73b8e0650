use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid value for field `{field}`: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Machine-readable kind reported in the `status` field of error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Unauthenticated => "unauthenticated",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::NotFound(_) => "not_found",
            AppError::InvalidField { .. } => "invalid_field",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Conflict(_) => "conflict",
            AppError::Database(_) | AppError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Unauthenticated | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidField { .. } | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(ref e) => {
                tracing::error!(error = %e, "Database failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(ref msg) => {
                tracing::error!(error = %msg, "Internal failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match self {
            // Storage details stay in the logs
            AppError::Database(_) => "Internal server error".to_string(),
            ref other => other.to_string(),
        };

        let body = Json(json!({
            "status": self.kind(),
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(AppError::Unauthenticated.kind(), "unauthenticated");
        assert_eq!(AppError::invalid_field("text_size", "bad").kind(), "invalid_field");
        assert_eq!(AppError::Internal("boom".into()).kind(), "internal_error");
    }

    #[test]
    fn test_status_codes() {
        let response = AppError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = AppError::invalid_field("text_size", "bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::Conflict("taken".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_field_message_names_field() {
        let err = AppError::invalid_field("text_size", "expected one of small, medium, large");
        assert_eq!(
            err.to_string(),
            "Invalid value for field `text_size`: expected one of small, medium, large"
        );
    }
}
