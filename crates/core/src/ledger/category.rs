//! Expense categories.
//!
//! The set is fixed; adding a category is a code change, never user input.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Category of an operating expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Electricity, water, gas, internet.
    Utilities,
    /// Books, stationery, classroom materials.
    Supplies,
    /// Repairs and upkeep of the building.
    Maintenance,
    /// Anything else.
    Other,
}

impl ExpenseCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [
        Self::Utilities,
        Self::Supplies,
        Self::Maintenance,
        Self::Other,
    ];

    /// Returns the canonical name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Utilities => "Utilities",
            Self::Supplies => "Supplies",
            Self::Maintenance => "Maintenance",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}
