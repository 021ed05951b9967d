//! Database migration runner for Maktab Finance.
//!
//! Usage:
//!   migrator [up] [-n N]  - Run pending migrations (all, or the next N)
//!   migrator down [-n N]  - Rollback the last N migrations (default 1)
//!   migrator status       - Show migration status
//!   migrator fresh        - Drop all tables and re-run migrations
//!   migrator refresh      - Rollback every migration, then re-run them
//!   migrator reset        - Rollback every migration
//!
//! The connection comes from the application configuration, so passwords with
//! special characters are encoded the same way the server encodes them.

use anyhow::Context;
use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maktab_db::{Migrator, connect};
use maktab_shared::AppConfig;

/// Apply or roll back the Maktab Finance schema.
#[derive(Parser)]
#[command(name = "migrator", version, about, long_about = None)]
struct Cli {
    /// Show debug messages
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Apply pending migrations
    Up {
        /// Number of pending migrations to apply
        #[arg(short, long)]
        num: Option<u32>,
    },
    /// Rollback applied migrations
    Down {
        /// Number of applied migrations to roll back
        #[arg(short, long, default_value_t = 1)]
        num: u32,
    },
    /// Check the status of all migrations
    Status,
    /// Drop all tables, then reapply all migrations
    Fresh,
    /// Rollback all applied migrations, then reapply all migrations
    Refresh,
    /// Rollback all applied migrations
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let default_filter = if cli.verbose {
        "debug"
    } else {
        "sea_orm_migration=info,migrator=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let db = connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    let command = cli.command.unwrap_or(Command::Up { num: None });
    match command {
        Command::Up { num } => Migrator::up(&db, num).await?,
        Command::Down { num } => Migrator::down(&db, Some(num)).await?,
        Command::Status => Migrator::status(&db).await?,
        Command::Fresh => Migrator::fresh(&db).await?,
        Command::Refresh => Migrator::refresh(&db).await?,
        Command::Reset => Migrator::reset(&db).await?,
    }

    info!(?command, "Migration command finished");
    Ok(())
}
