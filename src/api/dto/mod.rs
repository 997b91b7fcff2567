//! Data Transfer Objects for the HTTP API.
//!
//! Request DTOs carry `validator` annotations and convert into model types;
//! response DTOs are built from models via `From`.

mod error;
mod pagination;
mod todo;
mod user;

pub use error::{ErrorResponse, ValidationErrorResponse};
pub use pagination::{PagedResponse, PaginationMeta, PaginationParams};
pub use todo::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};
pub use user::{CreateUserRequest, UpdateUserRequest, UserResponse};
