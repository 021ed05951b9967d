//! Currency display formatting.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` everywhere; formatting happens only at the edge.

use rust_decimal::{Decimal, RoundingStrategy};

/// Symbol of the Bangladeshi taka, the only currency this system records.
pub const TAKA_SYMBOL: &str = "৳";

/// Formats an amount for display, e.g. `৳1,234.50`.
///
/// The amount is rounded to two decimal places. Negative amounts keep the sign after
/// the symbol (`৳-1,234.50`).
#[must_use]
pub fn format_taka(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{TAKA_SYMBOL}{sign}{}.{fraction}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
