//! Todo service for business logic operations.

use crate::error::{AppError, AppResult};
use crate::models::{NewTodo, Todo, UpdateTodo};
use crate::repositories::{TodoRepository, UserRepository};

/// Todo service for handling todo-related business logic.
#[derive(Clone)]
pub struct TodoService {
    todos: TodoRepository,
    users: UserRepository,
}

impl TodoService {
    /// Creates a new TodoService with the given repositories.
    pub fn new(todos: TodoRepository, users: UserRepository) -> Self {
        Self { todos, users }
    }

    /// Creates a new todo for an existing user.
    ///
    /// The owning user must exist; the foreign key on the todos table backs
    /// this up under concurrent deletes.
    ///
    /// # Returns
    /// The created todo with generated id and timestamps
    pub async fn create_todo(&self, new_todo: NewTodo) -> AppResult<Todo> {
        if !self.users.exists_by_id(new_todo.user_id).await? {
            return Err(AppError::not_found("User", new_todo.user_id));
        }
        self.todos.create(new_todo).await
    }

    /// Gets a todo by its ID.
    ///
    /// # Returns
    /// The todo if found, or `NotFound` error
    pub async fn get_todo(&self, id: i32) -> AppResult<Todo> {
        self.todos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Todo", id))
    }

    /// Lists todos with pagination.
    ///
    /// # Returns
    /// A tuple of (todos, total_count)
    pub async fn list_todos(&self, offset: i64, limit: i64) -> AppResult<(Vec<Todo>, i64)> {
        self.todos.list_paginated(offset, limit).await
    }

    /// Updates a todo's data. The owning user is never changed.
    ///
    /// # Returns
    /// The updated todo
    pub async fn update_todo(&self, id: i32, update_data: UpdateTodo) -> AppResult<Todo> {
        self.get_todo(id).await?;
        self.todos.update(id, update_data).await
    }

    /// Deletes a todo.
    ///
    /// Deleting a todo that does not exist is not an error.
    ///
    /// # Returns
    /// `true` if a todo was deleted, `false` if none matched
    pub async fn delete_todo(&self, id: i32) -> AppResult<bool> {
        let affected = self.todos.delete(id).await?;
        Ok(affected > 0)
    }
}
