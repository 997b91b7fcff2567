//! User CRUD request handlers.
//!
//! Provides HTTP handlers for user management operations.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::api::doc::USER_TAG;
use crate::api::dto::{
    CreateUserRequest, PagedResponse, PaginationParams, TodoResponse, UpdateUserRequest,
    UserResponse,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates user-related routes.
///
/// Routes:
/// - GET /           - List users (paginated)
/// - POST /          - Create a new user
/// - GET /{id}       - Get user by ID
/// - PUT /{id}       - Update user by ID
/// - DELETE /{id}    - Delete user by ID
/// - GET /{id}/todos - List the user's todos
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/{id}/todos", get(list_user_todos))
}

/// GET /users - List users with pagination.
#[utoipa::path(
    get,
    path = "/users",
    params(PaginationParams),
    responses(
        (status = 200, description = "A page of users", body = PagedResponse<UserResponse>)
    ),
    tag = USER_TAG
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResponse<UserResponse>>, AppError> {
    let params = params.normalize();
    let (users, total) = state
        .services
        .users
        .list_users(params.offset(), params.limit())
        .await?;
    let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(PagedResponse::new(responses, &params, total as u64)))
}

/// GET /users/{id} - Get user by ID.
///
/// Returns the user with the specified ID or 404 if not found.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "User not found")
    ),
    tag = USER_TAG
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.services.users.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /users/{id}/todos - List a user's todos.
///
/// Returns the user's todos in the order they were created, or 404 if the
/// user does not exist.
#[utoipa::path(
    get,
    path = "/users/{id}/todos",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's todos", body = [TodoResponse]),
        (status = 404, description = "User not found")
    ),
    tag = USER_TAG
)]
pub async fn list_user_todos(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<TodoResponse>>, AppError> {
    let todos = state.services.users.list_user_todos(id).await?;
    let responses: Vec<TodoResponse> = todos.into_iter().map(TodoResponse::from).collect();
    Ok(Json(responses))
}

/// POST /users - Create new user.
///
/// Creates a new user from the JSON request body.
/// Returns 201 Created with the created user data.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation failed or email already exists")
    ),
    tag = USER_TAG
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let new_user = payload.into_new_user();
    let user = state.services.users.create_user(new_user).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PUT /users/{id} - Update user.
///
/// Updates the user with the specified ID. The password is never changed
/// by this endpoint.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation failed or email already exists"),
        (status = 404, description = "User not found")
    ),
    tag = USER_TAG
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let update_data = payload.into_update_user();
    let user = state.services.users.update_user(id, update_data).await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /users/{id} - Delete user.
///
/// Deleting is idempotent: returns 204 No Content whether or not a user
/// with this ID existed.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted (or did not exist)")
    ),
    tag = USER_TAG
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.services.users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
