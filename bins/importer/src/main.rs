//! One-shot import of a legacy Maktab Finance database.
//!
//! Copies every donation, expense and salary payment from the source database into
//! the configured one, keeping ids, plus every admin whose hash is Argon2. Everything
//! is written in a single destination transaction, so a failed import leaves the
//! destination untouched.
//!
//! Usage: maktab-importer <SOURCE_URL>
//!   e.g. maktab-importer "sqlite://./data/maktab_finance.db?mode=ro"

use anyhow::Context;
use clap::Parser;
use sea_orm::Database;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maktab_db::{connect, import_legacy, migrate};
use maktab_shared::AppConfig;

/// Copy a legacy Maktab Finance database into the configured one.
#[derive(Parser, Debug)]
#[command(name = "maktab-importer", version, about, long_about = None)]
struct Cli {
    /// Connection URL of the legacy database
    source_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maktab=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    info!("Connecting to source database...");
    let source = Database::connect(cli.source_url.as_str())
        .await
        .context("Failed to connect to source database")?;

    info!("Connecting to destination database...");
    let destination = connect(&config.database)
        .await
        .context("Failed to connect to destination database")?;
    migrate(&destination)
        .await
        .context("Failed to prepare destination schema")?;

    let report = import_legacy(&source, &destination)
        .await
        .context("Import failed, nothing was written")?;
    info!(
        donations = report.donations,
        expenses = report.expenses,
        salaries = report.salaries,
        admins = report.admins,
        admins_skipped = report.admins_skipped,
        "Import complete"
    );

    Ok(())
}
