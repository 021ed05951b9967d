//! Domain types for ledger records and their inputs.

use chrono::NaiveDate;
use maktab_shared::types::{DonationId, ExpenseId, SalaryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::error::ValidationError;
use super::validation::validate_amount;

/// Common view over every ledger record, used by the aggregation functions.
pub trait LedgerRecord {
    /// Amount of money recorded.
    fn amount(&self) -> Decimal;

    /// Calendar date of the record.
    fn date(&self) -> NaiveDate;
}

/// A donation received by the maktab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    /// Database id.
    pub id: DonationId,
    /// Real donor name, stored even for anonymous donations.
    pub donor_name: String,
    /// Amount donated.
    pub amount: Decimal,
    /// Date the donation was received.
    pub date: NaiveDate,
    /// Free-form notes.
    pub notes: Option<String>,
    /// When set, non-admin viewers see a placeholder instead of the donor name.
    pub is_anonymous: bool,
}

/// Fields supplied when creating or updating a donation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationInput {
    /// Donor name.
    pub donor_name: String,
    /// Amount donated.
    pub amount: Decimal,
    /// Date the donation was received.
    pub date: NaiveDate,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Hide the donor name from non-admin viewers.
    #[serde(default)]
    pub is_anonymous: bool,
}

impl DonationInput {
    /// Checks business rules before storage.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for an amount that is negative or not storable.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount(self.amount)
    }
}

/// An operating expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Database id.
    pub id: ExpenseId,
    /// What the money was spent on.
    pub description: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Date of the expense.
    pub date: NaiveDate,
    /// Expense category.
    pub category: ExpenseCategory,
}

/// Fields supplied when creating or updating an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseInput {
    /// What the money was spent on.
    pub description: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Date of the expense.
    pub date: NaiveDate,
    /// Expense category.
    pub category: ExpenseCategory,
}

impl ExpenseInput {
    /// Checks business rules before storage.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for an amount that is negative or not storable.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount(self.amount)
    }
}

/// A salary payment to a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    /// Database id.
    pub id: SalaryId,
    /// Teacher who was paid.
    pub teacher_name: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Payment date.
    pub date: NaiveDate,
}

/// Fields supplied when creating or updating a salary payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Teacher who was paid.
    pub teacher_name: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Payment date.
    pub date: NaiveDate,
}

impl SalaryInput {
    /// Checks business rules before storage.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for an amount that is negative or not storable.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount(self.amount)
    }
}

impl LedgerRecord for Donation {
    fn amount(&self) -> Decimal {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl LedgerRecord for Expense {
    fn amount(&self) -> Decimal {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl LedgerRecord for Salary {
    fn amount(&self) -> Decimal {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_donation_input_defaults_from_json() {
        let input: DonationInput = serde_json::from_str(
            r#"{"donor_name":"Karim","amount":"500","date":"2024-03-01"}"#,
        )
        .unwrap();
        assert_eq!(input.notes, None);
        assert!(!input.is_anonymous);
        assert_eq!(input.amount, dec!(500));
        assert_eq!(input.date, date(2024, 3, 1));
    }

    #[test]
    fn test_expense_input_rejects_unknown_category() {
        let result: Result<ExpenseInput, _> = serde_json::from_str(
            r#"{"description":"Lunch","amount":"50","date":"2024-03-01","category":"Food"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_inputs_reject_negative_amounts() {
        let donation = DonationInput {
            donor_name: "Karim".into(),
            amount: dec!(-1),
            date: date(2024, 3, 1),
            notes: None,
            is_anonymous: false,
        };
        assert_eq!(donation.validate(), Err(ValidationError::NegativeAmount));

        let expense = ExpenseInput {
            description: "Electricity".into(),
            amount: dec!(-0.5),
            date: date(2024, 3, 1),
            category: ExpenseCategory::Utilities,
        };
        assert_eq!(expense.validate(), Err(ValidationError::NegativeAmount));

        let salary = SalaryInput {
            teacher_name: "Ustadh Rahman".into(),
            amount: dec!(12000),
            date: date(2024, 3, 1),
        };
        assert!(salary.validate().is_ok());
    }
}
