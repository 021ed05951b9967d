//! Common types used across the application.

pub mod date;
pub mod id;
pub mod money;

pub use date::{YearMonth, format_display_date};
pub use id::*;
pub use money::{TAKA_SYMBOL, format_taka};
