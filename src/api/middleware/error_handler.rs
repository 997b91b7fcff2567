//! Error handler for converting AppError to HTTP responses.
//!
//! Implements the IntoResponse trait for AppError, giving every handler a
//! consistent error envelope and status code mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::{ErrorResponse, ValidationErrorResponse};
use crate::error::AppError;

/// Maps an AppError variant to its HTTP status code.
pub fn error_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. }
        | AppError::ValidationErrors { .. }
        | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Database { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - Duplicate → 400 BAD_REQUEST
    /// - ValidationErrors → 400 BAD_REQUEST (field-level envelope)
    /// - BadRequest → 400 BAD_REQUEST
    /// - Database → 500 INTERNAL_SERVER_ERROR
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    /// - ConnectionPool → 503 SERVICE_UNAVAILABLE
    fn into_response(self) -> Response {
        let status = error_status_code(&self);

        let error_response = match &self {
            AppError::NotFound { entity, .. } => {
                ErrorResponse::new(format!("{entity} not found"), self.to_string())
            }
            AppError::Duplicate { field, .. } => {
                ErrorResponse::new(format!("{} already exists", capitalize(field)), self.to_string())
            }
            AppError::ValidationErrors { errors } => {
                let fields = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                return (status, Json(ValidationErrorResponse::new(fields))).into_response();
            }
            AppError::BadRequest { message } => {
                ErrorResponse::new("Bad Request", message.clone())
            }
            AppError::Database { source, .. } | AppError::Internal { source } => {
                tracing::error!(error = %source, "Unhandled error");
                ErrorResponse::new("Internal Server Error", source.to_string())
            }
            AppError::ConnectionPool { source } => {
                tracing::error!(error = %source, "Connection pool error");
                ErrorResponse::new("Service Unavailable", "Database connection unavailable")
            }
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFieldError;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = AppError::not_found("User", 42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"], "User not found");
        assert_eq!(json["message"], "User not found: id=42");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_duplicate_email_maps_to_400() {
        let response = AppError::duplicate_email("a@x.com").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Email already exists");
        assert_eq!(json["message"], "User with email 'a@x.com' already exists");
    }

    #[tokio::test]
    async fn test_validation_errors_map_to_field_envelope() {
        let error = AppError::ValidationErrors {
            errors: vec![ValidationFieldError {
                field: "email".to_string(),
                message: "Invalid email format".to_string(),
            }],
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["fields"][0], "email: Invalid email format");
        assert_eq!(json["message"], "Validation failed for one or more fields.");
    }

    #[tokio::test]
    async fn test_internal_error_keeps_original_message() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("worker thread panicked"),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Internal Server Error");
        assert_eq!(json["message"], "worker thread panicked");
    }

    #[tokio::test]
    async fn test_connection_pool_maps_to_503() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("pool exhausted"),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            error_status_code(&AppError::BadRequest {
                message: "nope".to_string()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status_code(&AppError::Database {
                operation: "insert user".to_string(),
                source: anyhow::anyhow!("boom"),
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
