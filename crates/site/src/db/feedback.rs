//! Feedback repository.
//!
//! Feedback rows are read in full; the columns are not mapped to a struct so
//! the listing keeps working as the form grows new fields.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::Record;

/// Repository for feedback listings.
pub struct FeedbackRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FeedbackRepository<'a> {
    /// Create a new feedback repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every column of every feedback row, ordered by ID. `limit` of `None` means all rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, limit: Option<u32>) -> Result<Vec<Record>, RepositoryError> {
        let records = sqlx::query_scalar::<_, Record>(
            r"
            SELECT to_jsonb(f) AS record
            FROM feedback f
            ORDER BY f.id ASC
            LIMIT $1
            ",
        )
        .bind(limit.map(i64::from))
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }
}
