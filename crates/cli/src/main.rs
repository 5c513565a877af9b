//! ZZT CLI - Database probes, HTTP smoke test and migrations.
//!
//! # Usage
//!
//! ```bash
//! # Dump active admin users
//! zzt-cli admin list
//!
//! # Dump the vehicle image URLs of a quotation
//! zzt-cli quotation images ZZT-2025-0042
//!
//! # List feedback and packages
//! zzt-cli feedback list --limit 20
//! zzt-cli package list
//!
//! # Smoke-test the local API
//! zzt-cli probe --url http://localhost:3000/api/packages
//!
//! # Run database migrations
//! zzt-cli migrate
//! ```
//!
//! Every command runs once and exits: 0 on success, 1 on any failure.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zzt_cli::commands::{self, CommandError};
use zzt_cli::output::OutputFormat;

#[derive(Parser)]
#[command(name = "zzt-cli")]
#[command(author, version, about = "ZZT Tours diagnostic tools")]
struct Cli {
    /// Output format for admin and quotation dumps
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Inspect quotations
    Quotation {
        #[command(subcommand)]
        action: QuotationAction,
    },
    /// Inspect customer feedback
    Feedback {
        #[command(subcommand)]
        action: FeedbackAction,
    },
    /// Inspect tour packages
    Package {
        #[command(subcommand)]
        action: PackageAction,
    },
    /// Issue one GET against the site and check for a JSON body
    Probe {
        /// URL to request
        #[arg(long, env = "ZZT_PROBE_URL", default_value = commands::probe::DEFAULT_URL)]
        url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,

        /// Fail unless the status is 2xx and the body is JSON
        #[arg(long)]
        require_success: bool,
    },
    /// Run database migrations
    Migrate,
}

#[derive(Subcommand)]
enum AdminAction {
    /// List admin users (active only unless --all)
    List {
        /// Include inactive accounts
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand)]
enum QuotationAction {
    /// Show the vehicle image URLs stored on a quotation
    Images {
        /// Quotation number, e.g. ZZT-2025-0042
        number: String,
    },
}

#[derive(Subcommand)]
enum FeedbackAction {
    /// Print every feedback row
    List {
        /// Maximum number of rows
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Subcommand)]
enum PackageAction {
    /// Print every package row
    List,
}

#[tokio::main]
async fn main() {
    // Load .env before parsing so clap sees env-backed defaults
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the dump itself
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "zzt_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let format = cli.format;
    match cli.command {
        Commands::Admin {
            action: AdminAction::List { all },
        } => {
            commands::admin::list(all, format).await?;
        }
        Commands::Quotation {
            action: QuotationAction::Images { number },
        } => {
            commands::quotation::images(&number, format).await?;
        }
        Commands::Feedback {
            action: FeedbackAction::List { limit },
        } => {
            commands::feedback::list(limit).await?;
        }
        Commands::Package {
            action: PackageAction::List,
        } => {
            commands::package::list().await?;
        }
        Commands::Probe {
            url,
            timeout_secs,
            require_success,
        } => {
            commands::probe::run(&url, Duration::from_secs(timeout_secs), require_success)
                .await?;
        }
        Commands::Migrate => commands::migrate::run().await?,
    }
    Ok(())
}
