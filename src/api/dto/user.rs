//! User-related DTOs for API requests and responses.

use crate::models::{NewUser, UpdateUser, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new user.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(min_length = 1, max_length = 255)]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: String,
    #[validate(length(min = 6, max = 255, message = "Password must be at least 6 characters"))]
    #[schema(format = "password", min_length = 6, max_length = 255)]
    pub password: String,
}

impl CreateUserRequest {
    /// Converts the request DTO into a NewUser model for database insertion.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

/// Request body for updating a user.
///
/// A PUT overwrites name and email; both are required. The password
/// cannot be changed through this endpoint.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(min_length = 1, max_length = 255)]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: String,
}

impl UpdateUserRequest {
    /// Converts the request DTO into an UpdateUser model for database update.
    pub fn into_update_user(self) -> UpdateUser {
        UpdateUser {
            name: self.name,
            email: self.email,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for user data (excludes sensitive fields like password).
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_rejects_invalid_email() {
        let request = CreateUserRequest {
            name: "Alice".to_string(),
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_user_request_rejects_blank_name() {
        let request = CreateUserRequest {
            name: String::new(),
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_user_request_rejects_missing_fields() {
        assert!(serde_json::from_str::<UpdateUserRequest>("{}").is_err());
        assert!(serde_json::from_str::<UpdateUserRequest>(r#"{"name": "Alice"}"#).is_err());
        assert!(
            serde_json::from_str::<UpdateUserRequest>(r#"{"email": "alice@example.com"}"#)
                .is_err()
        );
    }

    #[test]
    fn test_update_user_request_maps_to_full_overwrite() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"name": "Alice", "email": "alice@example.com"}"#).unwrap();
        assert!(request.validate().is_ok());
        let update = request.into_update_user();
        assert_eq!(update.name, "Alice");
        assert_eq!(update.email, "alice@example.com");
    }

    #[test]
    fn test_user_response_omits_password() {
        let json = serde_json::to_value(UserResponse {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "alice@example.com");
    }
}
