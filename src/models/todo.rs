use diesel::prelude::*;
use diesel_derive_enum::DbEnum;
use jiff_diesel::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle stage of a todo.
///
/// Stored in Postgres as the `todo_stage` enum and serialized over the wire
/// as `NOT_STARTED`, `IN_PROGRESS` or `DONE`.
#[derive(DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[db_enum(
    existing_type_path = "crate::schema::sql_types::TodoStage",
    value_style = "SCREAMING_SNAKE_CASE"
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStage {
    NotStarted,
    InProgress,
    Done,
}

/// Todo model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub stage: TodoStage,
    pub user_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// NewTodo model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::todos)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub stage: TodoStage,
    pub user_id: i32,
}

/// UpdateTodo model for full-overwrite updates
///
/// A PUT overwrites title, description and stage; an absent description
/// clears the column, hence `treat_none_as_null`. The owning user is
/// deliberately not part of the changeset.
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::todos)]
pub struct UpdateTodo {
    pub title: String,
    #[diesel(treat_none_as_null = true)]
    pub description: Option<String>,
    pub stage: TodoStage,
}
