use crate::application::ports::RepositoryError;

/// Map constraint violations onto repository failures.
///
/// A unique or primary key violation becomes `Conflict`, a foreign key violation
/// `NotFound`; anything else stays a database error.
pub(crate) fn map_constraint_violation(
    err: sqlx::Error,
    conflict: impl FnOnce() -> String,
    missing: impl FnOnce() -> String,
) -> RepositoryError {
    match err.as_database_error() {
        Some(db) if db.is_unique_violation() => RepositoryError::Conflict(conflict()),
        Some(db) if db.is_foreign_key_violation() => RepositoryError::NotFound(missing()),
        _ => RepositoryError::Database(err),
    }
}
