use crate::error::{AppError, AppResult};
use axum::Json;
use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that validates the deserialized body.
///
/// Deserialization failures surface as `BadRequest`; failed `validator`
/// rules surface as `ValidationErrors` with one entry per field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, max = 255, message = "Name is required"))]
        name: String,
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_json() {
        let request = json_request(r#"{"name": "Alice", "email": "alice@example.com"}"#);

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        assert!(result.is_ok());
        let ValidatedJson(body) = result.unwrap();
        assert_eq!(body.name, "Alice");
        assert_eq!(body.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_validation_error_blank_name() {
        let request = json_request(r#"{"name": "", "email": "alice@example.com"}"#);

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        let error = result.unwrap_err();
        match error {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
                assert_eq!(errors[0].message, "Name is required");
            }
            _ => panic!("Expected ValidationErrors error, got {:?}", error),
        }
    }

    #[tokio::test]
    async fn test_validation_error_multiple_fields() {
        let request = json_request(r#"{"name": "", "email": "not-an-email"}"#);

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        let error = result.unwrap_err();
        match error {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 2);
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert!(fields.contains(&"name"));
                assert!(fields.contains(&"email"));
            }
            _ => panic!("Expected ValidationErrors error, got {:?}", error),
        }
    }

    #[tokio::test]
    async fn test_rejection_missing_field() {
        let request = json_request(r#"{"name": "Alice"}"#);

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        let error = result.unwrap_err();
        match error {
            AppError::BadRequest { message } => {
                assert!(!message.is_empty());
            }
            _ => panic!("Expected BadRequest error, got {:?}", error),
        }
    }

    #[tokio::test]
    async fn test_rejection_malformed_json() {
        let request = json_request("{not json");

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_rejection_missing_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .body(Body::from(
                r#"{"name": "Alice", "email": "alice@example.com"}"#,
            ))
            .unwrap();

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }
}
