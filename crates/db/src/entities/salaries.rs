//! `SeaORM` Entity for salaries table.

use maktab_core::ledger::Salary;
use maktab_shared::types::SalaryId;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row of the table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "salaries")]
pub struct Model {
    /// Auto-incremented id.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Teacher who was paid.
    pub teacher_name: String,
    /// Amount with two decimal places.
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub amount: Decimal,
    /// Date of payment.
    pub date: Date,
}

/// No relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Salary {
    fn from(model: Model) -> Self {
        Self {
            id: SalaryId::new(model.id),
            teacher_name: model.teacher_name,
            amount: model.amount,
            date: model.date,
        }
    }
}
