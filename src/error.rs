use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{
    ERR_ALL_FIELDS_REQUIRED, ERR_INTERNAL, ERR_INVALID_ADMIN_PASSWORD, ERR_METHOD_NOT_ALLOWED,
};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid admin password")]
    Forbidden,

    #[error("Missing required fields")]
    MissingFields,
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, ERR_INTERNAL)
            }
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, ERR_METHOD_NOT_ALLOWED),
            AppError::Forbidden => (StatusCode::FORBIDDEN, ERR_INVALID_ADMIN_PASSWORD),
            AppError::MissingFields => (StatusCode::BAD_REQUEST, ERR_ALL_FIELDS_REQUIRED),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::MethodNotAllowed.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(AppError::Forbidden.into_response().status(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::MissingFields.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolTimedOut)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_json_content_type() {
        let response = AppError::Forbidden.into_response();
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
