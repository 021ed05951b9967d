//! `SeaORM` active enums.

use maktab_core::ledger::ExpenseCategory as CategoryKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense category as stored in `expenses.category`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum ExpenseCategory {
    /// Electricity and water bills.
    #[sea_orm(string_value = "Utilities")]
    Utilities,
    /// Books and stationery.
    #[sea_orm(string_value = "Supplies")]
    Supplies,
    /// Repairs and upkeep of the building.
    #[sea_orm(string_value = "Maintenance")]
    Maintenance,
    /// Anything else.
    #[sea_orm(string_value = "Other")]
    Other,
}

impl From<CategoryKind> for ExpenseCategory {
    fn from(category: CategoryKind) -> Self {
        match category {
            CategoryKind::Utilities => Self::Utilities,
            CategoryKind::Supplies => Self::Supplies,
            CategoryKind::Maintenance => Self::Maintenance,
            CategoryKind::Other => Self::Other,
        }
    }
}

impl From<ExpenseCategory> for CategoryKind {
    fn from(category: ExpenseCategory) -> Self {
        match category {
            ExpenseCategory::Utilities => Self::Utilities,
            ExpenseCategory::Supplies => Self::Supplies,
            ExpenseCategory::Maintenance => Self::Maintenance,
            ExpenseCategory::Other => Self::Other,
        }
    }
}
