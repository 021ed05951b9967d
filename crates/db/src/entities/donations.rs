//! `SeaORM` Entity for donations table.

use maktab_core::ledger::Donation;
use maktab_shared::types::DonationId;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row of the table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "donations")]
pub struct Model {
    /// Auto-incremented id.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Real donor name, never masked here.
    pub donor_name: String,
    /// Amount with two decimal places.
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub amount: Decimal,
    /// Calendar date of the entry.
    pub date: Date,
    /// Free-form notes.
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    /// Whether the donor name is hidden from visitors.
    pub is_anonymous: bool,
}

/// No relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Donation {
    fn from(model: Model) -> Self {
        Self {
            id: DonationId::new(model.id),
            donor_name: model.donor_name,
            amount: model.amount,
            date: model.date,
            notes: model.notes,
            is_anonymous: model.is_anonymous,
        }
    }
}
