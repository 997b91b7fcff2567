//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
///
/// # Routes
/// - `/users` - User CRUD operations and per-user todo listing
/// - `/todos` - Todo CRUD operations
/// - `/health`, `/health/ready`, `/health/live` - Health checks
/// - `/swagger-ui` - Interactive API documentation
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/users", handlers::users::user_routes())
        .nest("/todos", handlers::todos::todo_routes())
        .merge(handlers::health::health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        // Middleware is applied in reverse order - last added runs first,
        // so logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/users"));
        assert!(paths.contains(&"/users/{id}"));
        assert!(paths.contains(&"/users/{id}/todos"));
        assert!(paths.contains(&"/todos"));
        assert!(paths.contains(&"/todos/{id}"));
        assert!(paths.contains(&"/health"));
    }
}
