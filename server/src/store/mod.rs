//! Postgres implementation of the core repository traits.

mod favorites;
mod recipes;
mod reports;
mod shopping_lists;

pub use recipes::into_recipes;

use crate::db::{DbConn, DbPool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use kitem_core::error::{StoreError, StoreResult};

/// Borrows the pool and checks out one connection per repository call.
pub struct PgStore<'a> {
    pool: &'a DbPool,
}

impl<'a> PgStore<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> StoreResult<DbConn> {
        self.pool.get().map_err(|e| {
            tracing::error!("Failed to get database connection: {}", e);
            StoreError::Backend(e.to_string())
        })
    }
}

/// Unique and foreign-key violations keep their meaning; anything else is a backend failure.
pub fn store_error(err: DieselError) -> StoreError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            StoreError::UniqueViolation
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            StoreError::ForeignKeyViolation
        }
        other => StoreError::Backend(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_backend_error() {
        assert!(matches!(
            store_error(DieselError::NotFound),
            StoreError::Backend(_)
        ));
    }
}
