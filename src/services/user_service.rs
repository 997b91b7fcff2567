//! User service for business logic operations.
//!
//! Provides a higher-level API for user operations, encapsulating
//! business rules and coordinating with the repository layer.

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, Todo, UpdateUser, User};
use crate::repositories::{TodoRepository, UserRepository};

/// User service for handling user-related business logic.
///
/// This service wraps the `UserRepository` and provides business-level
/// operations. Since repositories use `Arc` internally via the connection
/// pool, cloning is cheap.
#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
    todos: TodoRepository,
}

impl UserService {
    /// Creates a new UserService with the given repositories.
    pub fn new(users: UserRepository, todos: TodoRepository) -> Self {
        Self { users, todos }
    }

    /// Creates a new user.
    ///
    /// The email address must be unique. The uniqueness check here produces
    /// a friendly error; the unique constraint on the users table remains
    /// the real enforcement boundary under concurrent inserts.
    ///
    /// # Returns
    /// The created user with generated id and timestamps
    pub async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        if self.users.exists_by_email(&new_user.email).await? {
            return Err(AppError::duplicate_email(&new_user.email));
        }
        self.users.create(new_user).await
    }

    /// Gets a user by their ID.
    ///
    /// # Returns
    /// The user if found, or `NotFound` error
    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User", id))
    }

    /// Lists users with pagination.
    ///
    /// # Arguments
    /// * `offset` - Number of records to skip
    /// * `limit` - Maximum number of records to return
    ///
    /// # Returns
    /// A tuple of (users, total_count)
    pub async fn list_users(&self, offset: i64, limit: i64) -> AppResult<(Vec<User>, i64)> {
        self.users.list_paginated(offset, limit).await
    }

    /// Lists all todos owned by a user, in insertion order.
    ///
    /// # Returns
    /// The user's todos, or `NotFound` if the user does not exist
    pub async fn list_user_todos(&self, id: i32) -> AppResult<Vec<Todo>> {
        if !self.users.exists_by_id(id).await? {
            return Err(AppError::not_found("User", id));
        }
        self.todos.list_by_user(id).await
    }

    /// Updates a user's data.
    ///
    /// Overwrites name and email; the password is never touched by this
    /// operation. Keeping the current email is allowed, but changing it to
    /// another user's email is not.
    ///
    /// # Returns
    /// The updated user
    pub async fn update_user(&self, id: i32, update_data: UpdateUser) -> AppResult<User> {
        let existing = self.get_user(id).await?;

        if update_data.email != existing.email
            && self.users.exists_by_email(&update_data.email).await?
        {
            return Err(AppError::duplicate_email(&update_data.email));
        }

        self.users.update(id, update_data).await
    }

    /// Deletes a user.
    ///
    /// Deleting a user that does not exist is not an error.
    ///
    /// # Returns
    /// `true` if a user was deleted, `false` if none matched
    pub async fn delete_user(&self, id: i32) -> AppResult<bool> {
        let affected = self.users.delete(id).await?;
        Ok(affected > 0)
    }
}
