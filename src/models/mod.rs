//! Diesel models for the users and todos tables.

mod todo;
mod user;

pub use todo::{NewTodo, Todo, TodoStage, UpdateTodo};
pub use user::{NewUser, UpdateUser, User};
