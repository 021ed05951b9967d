//! Business rule validation for ledger input.

use rust_decimal::Decimal;

use super::error::ValidationError;

/// Decimal places a stored amount keeps.
pub const AMOUNT_SCALE: u32 = 2;

/// Whole-number digits a stored amount keeps.
pub const AMOUNT_INTEGER_DIGITS: u32 = 12;

/// Rejects amounts the ledger columns cannot hold exactly. Zero is allowed.
///
/// Trailing zeros do not count towards the decimal places, so `1.500` passes.
///
/// # Errors
///
/// Returns `ValidationError::NegativeAmount` if `amount < 0`,
/// `ValidationError::TooManyDecimalPlaces` if it has more than two significant
/// decimal places, and `ValidationError::AmountTooLarge` if it needs more than twelve
/// whole-number digits.
pub fn validate_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount);
    }
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(ValidationError::TooManyDecimalPlaces { max: AMOUNT_SCALE });
    }
    if amount >= Decimal::from(10_i64.pow(AMOUNT_INTEGER_DIGITS)) {
        return Err(ValidationError::AmountTooLarge);
    }
    Ok(())
}
