//! Shared types, errors, and configuration for Maktab Finance.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for ledger records
//! - Display formatting for amounts, dates and months
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, AppConfigError};
pub use error::AppError;
