//! One-shot copy of a legacy Maktab Finance database.
//!
//! The legacy schema keeps ledgers in `donation`, `expense` and `salary`, stores amounts
//! as floating point and admin password hashes as raw bytes. Rows are read with plain
//! selects so either a SQLite file or the hosted Postgres copy can be the source.
//!
//! Everything is written in one destination transaction. Any failure rolls it back.

use chrono::NaiveDate;
use maktab_core::ledger::{ExpenseCategory as CategoryKind, validate_amount};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use sea_orm::sea_query::{Alias, Order, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbBackend, DbErr, EntityTrait, FromQueryResult, NotSet, QueryFilter, Set, TransactionTrait,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::entities::{admin_users, donations, expenses, salaries};

/// Errors that abort an import.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Reading the source or writing the destination failed.
    #[error("Storage error: {0}")]
    Storage(#[from] DbErr),

    /// A legacy amount is not a finite number, or is one the ledger refuses.
    #[error("{table} #{id} has an unreadable or invalid amount")]
    InvalidAmount {
        /// Legacy table name.
        table: &'static str,
        /// Legacy row id.
        id: i32,
    },

    /// A legacy expense uses a category outside the fixed set.
    #[error("expense #{id} has unknown category `{category}`")]
    UnknownCategory {
        /// Legacy row id.
        id: i32,
        /// Category as stored.
        category: String,
    },
}

/// Rows copied per table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Donations copied.
    pub donations: usize,
    /// Expenses copied.
    pub expenses: usize,
    /// Salary payments copied.
    pub salaries: usize,
    /// Admin identities copied.
    pub admins: usize,
    /// Admin identities left out: unreadable or non-Argon2 hash, or username taken.
    pub admins_skipped: usize,
}

#[derive(Debug, FromQueryResult)]
struct LegacyDonation {
    id: i32,
    donor_name: String,
    amount: f64,
    date: NaiveDate,
    notes: Option<String>,
    is_anonymous: bool,
}

#[derive(Debug, FromQueryResult)]
struct LegacyExpense {
    id: i32,
    description: String,
    amount: f64,
    date: NaiveDate,
    category: String,
}

#[derive(Debug, FromQueryResult)]
struct LegacySalary {
    id: i32,
    teacher_name: String,
    amount: f64,
    date: NaiveDate,
}

#[derive(Debug, FromQueryResult)]
struct LegacyAdmin {
    username: String,
    password_hash: Vec<u8>,
}

/// Copies every legacy ledger row, keeping ids, and every admin whose hash this
/// system can verify.
///
/// Admins get fresh ids. An admin whose username already exists in `destination`
/// is skipped.
///
/// # Errors
///
/// Returns an error if a legacy table cannot be read, a row cannot be converted, or a
/// write fails. Nothing is committed in that case.
pub async fn import_legacy(
    source: &DatabaseConnection,
    destination: &DatabaseConnection,
) -> Result<ImportReport, ImportError> {
    let legacy_donations: Vec<LegacyDonation> = fetch(
        source,
        "donation",
        &["id", "donor_name", "amount", "date", "notes", "is_anonymous"],
    )
    .await?;
    let legacy_expenses: Vec<LegacyExpense> = fetch(
        source,
        "expense",
        &["id", "description", "amount", "date", "category"],
    )
    .await?;
    let legacy_salaries: Vec<LegacySalary> = fetch(
        source,
        "salary",
        &["id", "teacher_name", "amount", "date"],
    )
    .await?;
    let legacy_admins: Vec<LegacyAdmin> =
        fetch(source, "adminuser", &["username", "password_hash"]).await?;

    let txn = destination.begin().await?;
    let copied = copy_all(
        &txn,
        legacy_donations,
        legacy_expenses,
        legacy_salaries,
        legacy_admins,
    )
    .await;

    match copied {
        Ok(report) => {
            txn.commit().await?;
            Ok(report)
        }
        Err(err) => {
            txn.rollback().await?;
            Err(err)
        }
    }
}

async fn fetch<T: FromQueryResult>(
    source: &DatabaseConnection,
    table: &str,
    columns: &[&str],
) -> Result<Vec<T>, DbErr> {
    let select = Query::select()
        .columns(columns.iter().map(|column| Alias::new(*column)))
        .from(Alias::new(table))
        .order_by(Alias::new("id"), Order::Asc)
        .to_owned();

    T::find_by_statement(source.get_database_backend().build(&select))
        .all(source)
        .await
}

fn to_amount(table: &'static str, id: i32, amount: f64) -> Result<Decimal, ImportError> {
    Decimal::from_f64(amount)
        .map(|value| value.round_dp(2))
        .filter(|value| validate_amount(*value).is_ok())
        .ok_or(ImportError::InvalidAmount { table, id })
}

async fn copy_all(
    txn: &DatabaseTransaction,
    legacy_donations: Vec<LegacyDonation>,
    legacy_expenses: Vec<LegacyExpense>,
    legacy_salaries: Vec<LegacySalary>,
    legacy_admins: Vec<LegacyAdmin>,
) -> Result<ImportReport, ImportError> {
    let mut report = ImportReport::default();

    let rows = legacy_donations
        .into_iter()
        .map(|row| {
            Ok(donations::ActiveModel {
                id: Set(row.id),
                amount: Set(to_amount("donation", row.id, row.amount)?),
                donor_name: Set(row.donor_name),
                date: Set(row.date),
                notes: Set(row.notes),
                is_anonymous: Set(row.is_anonymous),
            })
        })
        .collect::<Result<Vec<_>, ImportError>>()?;
    report.donations = rows.len();
    if !rows.is_empty() {
        donations::Entity::insert_many(rows).exec(txn).await?;
    }

    let rows = legacy_expenses
        .into_iter()
        .map(|row| {
            let category: CategoryKind =
                row.category.parse().map_err(|_| ImportError::UnknownCategory {
                    id: row.id,
                    category: row.category.clone(),
                })?;
            Ok(expenses::ActiveModel {
                id: Set(row.id),
                amount: Set(to_amount("expense", row.id, row.amount)?),
                description: Set(row.description),
                date: Set(row.date),
                category: Set(category.into()),
            })
        })
        .collect::<Result<Vec<_>, ImportError>>()?;
    report.expenses = rows.len();
    if !rows.is_empty() {
        expenses::Entity::insert_many(rows).exec(txn).await?;
    }

    let rows = legacy_salaries
        .into_iter()
        .map(|row| {
            Ok(salaries::ActiveModel {
                id: Set(row.id),
                amount: Set(to_amount("salary", row.id, row.amount)?),
                teacher_name: Set(row.teacher_name),
                date: Set(row.date),
            })
        })
        .collect::<Result<Vec<_>, ImportError>>()?;
    report.salaries = rows.len();
    if !rows.is_empty() {
        salaries::Entity::insert_many(rows).exec(txn).await?;
    }

    for row in legacy_admins {
        let Some(password_hash) = String::from_utf8(row.password_hash)
            .ok()
            .filter(|hash| hash.starts_with("$argon2"))
        else {
            warn!(username = %row.username, "Skipping admin with unsupported hash format");
            report.admins_skipped += 1;
            continue;
        };

        let existing = admin_users::Entity::find()
            .filter(admin_users::Column::Username.eq(row.username.as_str()))
            .one(txn)
            .await?;
        if existing.is_some() {
            info!(username = %row.username, "Admin already exists, skipping");
            report.admins_skipped += 1;
            continue;
        }

        admin_users::ActiveModel {
            id: NotSet,
            username: Set(row.username),
            password_hash: Set(password_hash),
        }
        .insert(txn)
        .await?;
        report.admins += 1;
    }

    reset_sequences(txn).await?;
    Ok(report)
}

/// Moves Postgres id sequences past the imported ids.
async fn reset_sequences(txn: &DatabaseTransaction) -> Result<(), DbErr> {
    if txn.get_database_backend() != DbBackend::Postgres {
        return Ok(());
    }

    for table in ["donations", "expenses", "salaries", "admin_users"] {
        txn.execute_unprepared(&format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
             COALESCE((SELECT MAX(id) FROM {table}), 0) + 1, false)"
        ))
        .await?;
    }

    Ok(())
}
