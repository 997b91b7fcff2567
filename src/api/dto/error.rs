//! Error response DTOs.
//!
//! Two envelope shapes go over the wire: a general one carrying an error
//! label, and a validation one carrying per-field messages. Both include
//! the moment the error was produced.

use jiff::Timestamp;
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response format.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Short, stable error label (e.g. "User not found")
    pub error: String,
    /// Human-readable detail for this occurrence
    pub message: String,
    /// When the error was produced
    #[schema(value_type = String, format = "date-time")]
    pub timestamp: Timestamp,
}

impl ErrorResponse {
    /// Creates a new error response stamped with the current time.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Timestamp::now(),
        }
    }
}

/// Error response format for request validation failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// One entry per failed field, as "field: message"
    pub fields: Vec<String>,
    /// Summary of the failure
    pub message: String,
    /// When the error was produced
    #[schema(value_type = String, format = "date-time")]
    pub timestamp: Timestamp,
}

impl ValidationErrorResponse {
    /// Creates a validation error response stamped with the current time.
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            message: "Validation failed for one or more fields.".to_string(),
            timestamp: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new(
            "User not found",
            "User not found: id=42",
        ))
        .unwrap();
        assert_eq!(json["error"], "User not found");
        assert_eq!(json["message"], "User not found: id=42");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_validation_error_response_shape() {
        let json = serde_json::to_value(ValidationErrorResponse::new(vec![
            "email: Invalid email format".to_string(),
        ]))
        .unwrap();
        assert_eq!(json["fields"].as_array().unwrap().len(), 1);
        assert_eq!(json["message"], "Validation failed for one or more fields.");
    }
}
