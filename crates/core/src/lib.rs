//! Core business logic for Maktab Finance.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Donation, expense and salary records and their validation
//! - `aggregate` - Totals, group-bys, monthly series and balances
//! - `auth` - Password hashing and the admin/anonymous access gate

pub mod aggregate;
pub mod auth;
pub mod ledger;
