//! Database operations for the ZZT `PostgreSQL` database.
//!
//! The site and the CLI probes only ever read from these tables.
//!
//! ## Tables
//!
//! - `admin_users` - Back-office accounts (username, email, active flag)
//! - `quotations` - Generated price quotes and their vehicle image field
//! - `feedback` - Customer feedback submissions
//! - `tour_packages` - Tour packages (the `Package` entity)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/site/migrations/` and run via:
//! ```bash
//! cargo run -p zzt-cli -- migrate
//! ```

pub mod admin_users;
pub mod feedback;
pub mod packages;
pub mod quotations;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use admin_users::AdminUserRepository;
pub use feedback::FeedbackRepository;
pub use packages::PackageRepository;
pub use quotations::QuotationRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// SSL mode and credentials come from the URL itself (`?sslmode=require`).
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(0)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
