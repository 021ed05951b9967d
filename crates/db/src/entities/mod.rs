//! `SeaORM` entity definitions.

pub mod admin_users;
pub mod donations;
pub mod expenses;
pub mod salaries;
pub mod sea_orm_active_enums;
