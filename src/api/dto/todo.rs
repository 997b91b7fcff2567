//! Todo-related DTOs for API requests and responses.

use crate::models::{NewTodo, Todo, TodoStage, UpdateTodo};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new todo.
///
/// The stage is not accepted on creation; every todo starts at
/// `NOT_STARTED`.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    #[schema(min_length = 1, max_length = 255)]
    pub title: String,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "User id must be positive"))]
    #[schema(minimum = 1)]
    pub user_id: i32,
}

impl CreateTodoRequest {
    /// Converts the request DTO into a NewTodo model, forcing the initial
    /// stage regardless of anything the client sent.
    pub fn into_new_todo(self) -> NewTodo {
        NewTodo {
            title: self.title,
            description: self.description,
            stage: TodoStage::NotStarted,
            user_id: self.user_id,
        }
    }
}

/// Request body for updating a todo.
///
/// A PUT replaces title, description and stage. The owning user cannot be
/// changed after creation, so no user id is accepted here.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    #[schema(min_length = 1, max_length = 255)]
    pub title: String,
    pub description: Option<String>,
    pub stage: TodoStage,
}

impl UpdateTodoRequest {
    /// Converts the request DTO into an UpdateTodo model for database update.
    pub fn into_update_todo(self) -> UpdateTodo {
        UpdateTodo {
            title: self.title,
            description: self.description,
            stage: self.stage,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for todo data.
#[derive(Debug, Serialize, ToSchema)]
pub struct TodoResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub stage: TodoStage,
    pub user_id: i32,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            stage: todo.stage,
            user_id: todo.user_id,
        }
    }
}
