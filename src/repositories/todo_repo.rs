//! Todo repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewTodo, Todo, UpdateTodo};

/// Todo repository holding an async connection pool.
#[derive(Clone)]
pub struct TodoRepository {
    pool: AsyncDbPool,
}

impl TodoRepository {
    /// Creates a new TodoRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new todo in the database.
    pub async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError> {
        use crate::schema::todos::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(todos)
            .values(&new_todo)
            .returning(Todo::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a todo by its ID.
    ///
    /// # Returns
    /// `Some(Todo)` if found, `None` otherwise
    pub async fn find_by_id(&self, todo_id: i32) -> Result<Option<Todo>, AppError> {
        use crate::schema::todos::dsl::*;
        let mut conn = self.pool.get().await?;

        todos
            .filter(id.eq(todo_id))
            .select(Todo::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists a page of todos ordered by id, together with the total count.
    pub async fn list_paginated(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Todo>, i64), AppError> {
        use crate::schema::todos::dsl::*;
        let mut conn = self.pool.get().await?;

        let total: i64 = todos.count().get_result(&mut conn).await?;

        let page = todos
            .order(id.asc())
            .offset(offset)
            .limit(limit)
            .select(Todo::as_select())
            .load(&mut conn)
            .await?;

        Ok((page, total))
    }

    /// Lists all todos belonging to a user, in insertion order.
    pub async fn list_by_user(&self, owner_id: i32) -> Result<Vec<Todo>, AppError> {
        use crate::schema::todos::dsl::*;
        let mut conn = self.pool.get().await?;

        todos
            .filter(user_id.eq(owner_id))
            .order(id.asc())
            .select(Todo::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Updates a todo's data. The owning user is never changed.
    ///
    /// # Returns
    /// The updated todo
    pub async fn update(&self, todo_id: i32, update_data: UpdateTodo) -> Result<Todo, AppError> {
        use crate::schema::todos::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(todos.filter(id.eq(todo_id)))
            .set((&update_data, updated_at.eq(diesel::dsl::now)))
            .returning(Todo::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a todo from the database.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, todo_id: i32) -> Result<usize, AppError> {
        use crate::schema::todos::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(todos.filter(id.eq(todo_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
