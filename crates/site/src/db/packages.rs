//! Package repository.
//!
//! The `Package` entity is stored in `tour_packages`.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::Record;

/// Repository for tour package listings.
pub struct PackageRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PackageRepository<'a> {
    /// Create a new package repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every column of every package row, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Record>, RepositoryError> {
        let records = sqlx::query_scalar::<_, Record>(
            r"
            SELECT to_jsonb(p) AS record
            FROM tour_packages AS p
            ORDER BY p.id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }
}
