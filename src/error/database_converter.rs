use crate::error::AppError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Converts diesel database errors into structured AppError variants.
///
/// The services check business rules (email uniqueness, user existence)
/// before writing, but those check-then-act sequences are not atomic. The
/// database constraints (`users_email_key`, `todos_user_id_fkey`) are the
/// real enforcement boundary, and this converter maps their violations onto
/// the same typed errors the service-level checks produce.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a diesel error to an appropriate AppError variant.
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                let (field, value) = extract_key_value(info.message())
                    .unwrap_or_else(|| ("email".to_string(), "unknown".to_string()));
                AppError::Duplicate {
                    entity: entity_label(info.table_name(), info.constraint_name()),
                    field,
                    value,
                }
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                let (field, value) = extract_key_value(info.message())
                    .unwrap_or_else(|| ("user_id".to_string(), "unknown".to_string()));
                if info.message().contains("is still referenced from table") {
                    // A delete hit a restrict rule: the row exists but other
                    // rows still point at it.
                    AppError::BadRequest {
                        message: format!(
                            "{} with {} '{}' is still referenced by another resource",
                            entity_label(info.table_name(), None),
                            field,
                            value
                        ),
                    }
                } else {
                    // An insert raced past the existence check: the
                    // referenced row is gone, so report it as missing.
                    AppError::NotFound {
                        entity: referenced_entity(&field),
                        field: "id".to_string(),
                        value,
                    }
                }
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "Resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }
}

/// Parses `Key (column)=(value)` out of a Postgres constraint-violation
/// detail message.
fn extract_key_value(message: &str) -> Option<(String, String)> {
    let rest = message.split("Key (").nth(1)?;
    let (column, rest) = rest.split_once(")=(")?;
    let (value, _) = rest.split_once(')')?;
    Some((column.to_string(), value.to_string()))
}

/// Turns a table name (or constraint name prefix) into an entity label,
/// e.g. `users` / `users_email_key` -> `User`.
fn entity_label(table: Option<&str>, constraint: Option<&str>) -> String {
    let table = table
        .map(str::to_string)
        .or_else(|| constraint.map(|c| c.split('_').next().unwrap_or(c).to_string()))
        .unwrap_or_else(|| "resource".to_string());
    capitalize(table.strip_suffix('s').unwrap_or(&table))
}

/// Maps a foreign-key column to the entity it references,
/// e.g. `user_id` -> `User`.
fn referenced_entity(column: &str) -> String {
    capitalize(column.strip_suffix("_id").unwrap_or(column))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    struct MockDatabaseErrorInfo {
        message: String,
        table_name: Option<String>,
        constraint_name: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            self.table_name.as_deref()
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint_name.as_deref()
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    #[test]
    fn test_unique_violation_maps_to_duplicate() {
        let info = MockDatabaseErrorInfo {
            message: "duplicate key value violates unique constraint \"users_email_key\"\nDETAIL: Key (email)=(test@example.com) already exists.".to_string(),
            table_name: Some("users".to_string()),
            constraint_name: Some("users_email_key".to_string()),
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(info));

        match DatabaseErrorConverter::convert_diesel_error(error, "insert user") {
            AppError::Duplicate {
                entity,
                field,
                value,
            } => {
                assert_eq!(entity, "User");
                assert_eq!(field, "email");
                assert_eq!(value, "test@example.com");
            }
            other => panic!("Expected Duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_foreign_key_violation_maps_to_not_found() {
        let info = MockDatabaseErrorInfo {
            message: "insert or update on table \"todos\" violates foreign key constraint \"todos_user_id_fkey\"\nDETAIL: Key (user_id)=(999) is not present in table \"users\".".to_string(),
            table_name: Some("todos".to_string()),
            constraint_name: Some("todos_user_id_fkey".to_string()),
        };
        let error =
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, Box::new(info));

        match DatabaseErrorConverter::convert_diesel_error(error, "insert todo") {
            AppError::NotFound {
                entity,
                field,
                value,
            } => {
                assert_eq!(entity, "User");
                assert_eq!(field, "id");
                assert_eq!(value, "999");
            }
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_restrict_violation_maps_to_bad_request() {
        let info = MockDatabaseErrorInfo {
            message: "update or delete on table \"users\" violates foreign key constraint \"todos_user_id_fkey\" on table \"todos\"\nDETAIL: Key (id)=(1) is still referenced from table \"todos\".".to_string(),
            table_name: Some("users".to_string()),
            constraint_name: Some("todos_user_id_fkey".to_string()),
        };
        let error =
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, Box::new(info));

        match DatabaseErrorConverter::convert_diesel_error(error, "delete user") {
            AppError::BadRequest { message } => {
                assert!(message.contains("User"));
                assert!(message.contains("'1'"));
                assert!(message.contains("still referenced"));
            }
            other => panic!("Expected BadRequest error, got {:?}", other),
        }
    }

    #[test]
    fn test_diesel_not_found_maps_to_not_found() {
        let result = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "find");
        assert!(matches!(result, AppError::NotFound { .. }));
    }

    #[test]
    fn test_other_errors_map_to_database() {
        let result = DatabaseErrorConverter::convert_diesel_error(
            DieselError::RollbackTransaction,
            "update todo",
        );
        match result {
            AppError::Database { operation, .. } => assert_eq!(operation, "update todo"),
            other => panic!("Expected Database error, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_key_value() {
        let message = "duplicate key value violates unique constraint \"users_email_key\"\nDETAIL: Key (email)=(test@example.com) already exists.";
        assert_eq!(
            extract_key_value(message),
            Some(("email".to_string(), "test@example.com".to_string()))
        );
        assert_eq!(extract_key_value("no detail here"), None);
    }

    #[test]
    fn test_entity_label() {
        assert_eq!(entity_label(Some("users"), None), "User");
        assert_eq!(entity_label(None, Some("todos_user_id_fkey")), "Todo");
        assert_eq!(entity_label(None, None), "Resource");
    }

    #[test]
    fn test_referenced_entity() {
        assert_eq!(referenced_entity("user_id"), "User");
        assert_eq!(referenced_entity("owner"), "Owner");
    }
}
