//! `SeaORM` Entity for admin_users table.

use sea_orm::entity::prelude::*;

/// One row of the table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admin_users")]
pub struct Model {
    /// Auto-incremented id.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Login name, unique.
    #[sea_orm(unique)]
    pub username: String,
    /// Argon2id PHC string; the salt is embedded in it.
    #[sea_orm(column_type = "Text")]
    pub password_hash: String,
}

/// No relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
