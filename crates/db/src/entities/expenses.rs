//! `SeaORM` Entity for expenses table.

use maktab_core::ledger::Expense;
use maktab_shared::types::ExpenseId;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ExpenseCategory;

/// One row of the table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Auto-incremented id.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// What the money was spent on.
    pub description: String,
    /// Amount with two decimal places.
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub amount: Decimal,
    /// Calendar date of the entry.
    pub date: Date,
    /// Fixed expense category.
    pub category: ExpenseCategory,
}

/// No relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: ExpenseId::new(model.id),
            description: model.description,
            amount: model.amount,
            date: model.date,
            category: model.category.into(),
        }
    }
}
