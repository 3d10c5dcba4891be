// src/infrastructure/repositories/error.rs
use sqlx::error::{DatabaseError, ErrorKind};
use sqlx::postgres::PgDatabaseError;

use crate::domain::errors::DomainError;

/// Foreign-key constraints and the column each one guards, as named in
/// `migrations/0001_init.sql`.
const FOREIGN_KEYS: [(&str, &str); 4] = [
    ("articles_topic_fkey", "topic"),
    ("articles_author_fkey", "author"),
    ("comments_author_fkey", "author"),
    ("comments_article_id_fkey", "article_id"),
];

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => map_database_error(db_err.as_ref()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_database_error(db_err: &dyn DatabaseError) -> DomainError {
    let detail = db_err
        .try_downcast_ref::<PgDatabaseError>()
        .and_then(PgDatabaseError::detail);

    match db_err.kind() {
        ErrorKind::UniqueViolation => DomainError::Conflict(
            detail
                .map(str::to_owned)
                .unwrap_or_else(|| "unique constraint violated".into()),
        ),
        ErrorKind::ForeignKeyViolation => {
            let column = db_err.constraint().and_then(foreign_key_column);
            let value = detail.and_then(key_value);
            match (column, value) {
                (Some(column), Some(value)) => {
                    DomainError::NotFound(format!("No such {column}: {value}"))
                }
                _ => DomainError::NotFound("referenced record not found".into()),
            }
        }
        ErrorKind::CheckViolation => DomainError::Validation(db_err.message().to_owned()),
        _ => DomainError::Persistence(db_err.message().to_owned()),
    }
}

fn foreign_key_column(constraint: &str) -> Option<&'static str> {
    FOREIGN_KEYS
        .iter()
        .find(|(name, _)| *name == constraint)
        .map(|(_, column)| *column)
}

/// Pulls `value` out of a Postgres detail line such as
/// `Key (author)=(not-a-user) is not present in table "users".`
fn key_value(detail: &str) -> Option<&str> {
    let (_, rest) = detail.split_once(")=(")?;
    let end = rest.rfind(')')?;
    Some(&rest[..end])
}
