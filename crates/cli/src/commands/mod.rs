//! Command implementations.
//!
//! Database commands follow one shape: connect, run a single query, close
//! the pool (on the error path too), then print.
//!
//! # Environment Variables
//!
//! - `ZZT_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `ZZT_IMAGE_DOMAINS` - Image host allowlist used to annotate quotation images
//! - `ZZT_PROBE_URL` - Default URL for `probe`

pub mod admin;
pub mod feedback;
pub mod migrate;
pub mod package;
pub mod probe;
pub mod quotation;

use sqlx::PgPool;
use thiserror::Error;
use zzt_core::QuotationNumberError;
use zzt_site::db::{self, RepositoryError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Query or row decoding error.
    #[error("Query failed: {0}")]
    Repository(#[from] RepositoryError),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The quotation number is malformed.
    #[error("Invalid quotation number: {0}")]
    InvalidQuotationNumber(#[from] QuotationNumberError),

    /// No quotation has the given number.
    #[error("Quotation not found: {0}")]
    QuotationNotFound(String),

    /// The HTTP request could not be completed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The smoke test got an answer, but not a healthy one.
    #[error("Probe failed: {0}")]
    ProbeFailed(String),

    /// Output could not be serialized.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Writing to stdout failed.
    #[error("Write error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connect to the database named by `ZZT_DATABASE_URL`.
///
/// # Errors
///
/// Returns `CommandError::MissingEnvVar` if no URL is configured and
/// `CommandError::Database` if the connection fails.
pub async fn connect() -> Result<PgPool, CommandError> {
    dotenvy::dotenv().ok();

    let database_url = zzt_site::config::database_url_from_env()
        .map_err(|_| CommandError::MissingEnvVar("ZZT_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    Ok(db::create_pool(&database_url).await?)
}
