//! Package listing.
//!
//! ```bash
//! zzt-cli package list
//! ```

use zzt_site::db::PackageRepository;
use zzt_site::models::Record;

use super::{CommandError, connect};
use crate::output;

/// Print every column of every tour package as JSON.
///
/// # Errors
///
/// Returns an error if the database is unreachable or the query fails.
pub async fn list() -> Result<Vec<Record>, CommandError> {
    let pool = connect().await?;
    let result = PackageRepository::new(&pool).list_all().await;
    pool.close().await;
    let rows = result?;

    tracing::info!(count = rows.len(), "Fetched packages");
    output::emit_json(&rows)?;

    Ok(rows)
}
