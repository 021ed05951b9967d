//! Ledger records kept by the maktab.
//!
//! This module implements the three independent ledgers:
//! - Donations received
//! - Operating expenses, grouped by a fixed set of categories
//! - Teacher salary payments
//!
//! It also carries the validation applied before any record is written.

pub mod category;
pub mod error;
pub mod types;
pub mod validation;

pub use category::ExpenseCategory;
pub use error::ValidationError;
pub use types::{
    Donation, DonationInput, Expense, ExpenseInput, LedgerRecord, Salary, SalaryInput,
};
pub use validation::validate_amount;
