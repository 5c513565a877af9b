//! Database migration command.
//!
//! ```bash
//! zzt-cli migrate
//! ```
//!
//! Migration files live in `crates/site/migrations/`.

use super::{CommandError, connect};

/// Apply all pending migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running migrations...");
    let result = sqlx::migrate!("../site/migrations").run(&pool).await;
    pool.close().await;
    result?;

    tracing::info!("Migrations complete!");
    Ok(())
}
