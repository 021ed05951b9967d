//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the three ledgers and admin identities
//! - Ledger repositories with create/list/update/delete
//! - The credential store for admin identities
//! - Database migrations
//! - The one-shot legacy import

pub mod credentials;
pub mod entities;
pub mod error;
pub mod import;
pub mod migration;
pub mod repositories;

pub use credentials::CredentialStore;
pub use error::StoreError;
pub use import::{ImportError, ImportReport, import_legacy};
pub use migration::Migrator;
pub use repositories::{
    AdminUserRepository, DonationRepository, ExpenseRepository, SalaryRepository,
};

use std::time::Duration;

use maktab_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// Opens the bounded connection pool described by `config`.
///
/// A caller that cannot get a connection within `acquire_timeout_secs` fails with
/// `DbErr::ConnectionAcquire` instead of waiting indefinitely.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .sqlx_logging(false);

    Database::connect(options).await
}

/// Applies every pending migration.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}
