pub mod sqlx_account_repository;
pub mod sqlx_comment_repository;
pub mod sqlx_post_repository;

use crate::domain::errors::DomainError;

/// Map a sqlx error onto the domain taxonomy. Serialization failures and
/// deadlocks on the like toggle's row-locked transaction become `Conflict`
/// so the caller can retry from a fresh read.
pub(crate) fn map_db_err(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if matches!(db_err.code().as_deref(), Some("40001") | Some("40P01")) {
            return DomainError::Conflict(err.to_string());
        }
    }
    DomainError::Infrastructure(err.to_string())
}
