use sqlx::error::ErrorKind;

use crate::application::repos::RepoError;

pub fn map_sqlx_error(err: sqlx::Error) -> RepoError {
    match err {
        sqlx::Error::RowNotFound => RepoError::NotFound,
        sqlx::Error::Database(db) => match db.kind() {
            ErrorKind::UniqueViolation => RepoError::Duplicate {
                constraint: constraint_from_message(db.message()),
            },
            ErrorKind::NotNullViolation => RepoError::InvalidInput {
                message: db.message().to_string(),
            },
            ErrorKind::ForeignKeyViolation | ErrorKind::CheckViolation => RepoError::Integrity {
                message: db.message().to_string(),
            },
            _ => RepoError::from_persistence(db.message()),
        },
        other => RepoError::from_persistence(other),
    }
}

/// SQLite does not expose constraint names through the driver, only
/// messages like `UNIQUE constraint failed: cafes.name`. The column list
/// after the final colon is the closest thing to a constraint name.
fn constraint_from_message(message: &str) -> String {
    message
        .rsplit_once(": ")
        .map(|(_, columns)| columns.to_string())
        .unwrap_or_else(|| message.to_string())
}
