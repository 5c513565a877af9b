//! Feedback listing.
//!
//! ```bash
//! zzt-cli feedback list --limit 20
//! ```

use zzt_site::db::FeedbackRepository;
use zzt_site::models::Record;

use super::{CommandError, connect};
use crate::output;

/// Print every column of every feedback row as JSON.
///
/// # Errors
///
/// Returns an error if the database is unreachable or the query fails.
pub async fn list(limit: Option<u32>) -> Result<Vec<Record>, CommandError> {
    let pool = connect().await?;
    let result = FeedbackRepository::new(&pool).list(limit).await;
    pool.close().await;
    let rows = result?;

    tracing::info!(count = rows.len(), "Fetched feedback rows");
    output::emit_json(&rows)?;

    Ok(rows)
}
