//! User repository for async database operations.
//!
//! Provides CRUD operations for the users table using diesel_async.

use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewUser, UpdateUser, User};

/// User repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<UserRepository>`.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new user in the database.
    ///
    /// # Arguments
    /// * `new_user` - The user data to insert
    ///
    /// # Returns
    /// The created user with generated id and timestamps
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(users)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a user by their ID.
    ///
    /// # Arguments
    /// * `user_id` - The user's ID
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Checks whether a user with the given email already exists.
    pub async fn exists_by_email(&self, user_email: &str) -> Result<bool, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::select(exists(users.filter(email.eq(user_email))))
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Checks whether a user with the given ID exists.
    pub async fn exists_by_id(&self, user_id: i32) -> Result<bool, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::select(exists(users.filter(id.eq(user_id))))
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists a page of users ordered by id, together with the total count.
    ///
    /// # Arguments
    /// * `offset` - Number of rows to skip
    /// * `limit` - Maximum number of rows to return
    ///
    /// # Returns
    /// The page of users and the total number of users in the table
    pub async fn list_paginated(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<User>, i64), AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        let total: i64 = users.count().get_result(&mut conn).await?;

        let page = users
            .order(id.asc())
            .offset(offset)
            .limit(limit)
            .select(User::as_select())
            .load(&mut conn)
            .await?;

        Ok((page, total))
    }

    /// Updates a user's data.
    ///
    /// # Arguments
    /// * `user_id` - The user's ID
    /// * `update_data` - The new name and email (full overwrite)
    ///
    /// # Returns
    /// The updated user
    pub async fn update(&self, user_id: i32, update_data: UpdateUser) -> Result<User, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(users.filter(id.eq(user_id)))
            .set((&update_data, updated_at.eq(diesel::dsl::now)))
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a user from the database.
    ///
    /// # Arguments
    /// * `user_id` - The user's ID
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, user_id: i32) -> Result<usize, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(users.filter(id.eq(user_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
