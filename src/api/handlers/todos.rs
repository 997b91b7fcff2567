//! Todo CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::api::doc::TODO_TAG;
use crate::api::dto::{
    CreateTodoRequest, PagedResponse, PaginationParams, TodoResponse, UpdateTodoRequest,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates todo-related routes.
///
/// Routes:
/// - GET /        - List todos (paginated)
/// - POST /       - Create a new todo
/// - GET /{id}    - Get todo by ID
/// - PUT /{id}    - Update todo by ID
/// - DELETE /{id} - Delete todo by ID
pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/{id}", get(get_todo).put(update_todo).delete(delete_todo))
}

/// GET /todos - List todos with pagination.
#[utoipa::path(
    get,
    path = "/todos",
    params(PaginationParams),
    responses(
        (status = 200, description = "A page of todos", body = PagedResponse<TodoResponse>)
    ),
    tag = TODO_TAG
)]
pub async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResponse<TodoResponse>>, AppError> {
    let params = params.normalize();
    let (todos, total) = state
        .services
        .todos
        .list_todos(params.offset(), params.limit())
        .await?;
    let responses: Vec<TodoResponse> = todos.into_iter().map(TodoResponse::from).collect();
    Ok(Json(PagedResponse::new(responses, &params, total as u64)))
}

/// GET /todos/{id} - Get todo by ID.
#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(("id" = i32, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The todo", body = TodoResponse),
        (status = 404, description = "Todo not found")
    ),
    tag = TODO_TAG
)]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.services.todos.get_todo(id).await?;
    Ok(Json(TodoResponse::from(todo)))
}

/// POST /todos - Create new todo.
///
/// Creates a new todo owned by an existing user. The todo always starts at
/// stage NOT_STARTED. Returns 201 Created with the created todo data.
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = TodoResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Owning user not found")
    ),
    tag = TODO_TAG
)]
pub async fn create_todo(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let new_todo = payload.into_new_todo();
    let todo = state.services.todos.create_todo(new_todo).await?;
    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

/// PUT /todos/{id} - Update todo.
///
/// Replaces the todo's title, description and stage. The owning user never
/// changes.
#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(("id" = i32, Path, description = "Todo id")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = TodoResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Todo not found")
    ),
    tag = TODO_TAG
)]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, AppError> {
    let update_data = payload.into_update_todo();
    let todo = state.services.todos.update_todo(id, update_data).await?;
    Ok(Json(TodoResponse::from(todo)))
}

/// DELETE /todos/{id} - Delete todo.
///
/// Deleting is idempotent: returns 204 No Content whether or not a todo
/// with this ID existed.
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = i32, Path, description = "Todo id")),
    responses(
        (status = 204, description = "Todo deleted (or did not exist)")
    ),
    tag = TODO_TAG
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.services.todos.delete_todo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
