//! Expense ledger repository.

use maktab_core::auth::AdminGrant;
use maktab_core::ledger::{Expense, ExpenseInput};
use maktab_shared::types::ExpenseId;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::expenses;
use crate::error::StoreError;

/// Expense repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new expense.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a negative amount, `StoreError::Storage` if
    /// the insert fails.
    pub async fn create(
        &self,
        _grant: &AdminGrant,
        input: ExpenseInput,
    ) -> Result<Expense, StoreError> {
        input.validate()?;

        let model = active_model(input).insert(&self.db).await?;
        tracing::info!(expense_id = model.id, category = ?model.category, "expense created");

        Ok(model.into())
    }

    /// Returns every expense, newest date first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Expense>, StoreError> {
        let models = expenses::Entity::find()
            .order_by_desc(expenses::Column::Date)
            .order_by_asc(expenses::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Expense::from).collect())
    }

    /// Overwrites every field of the expense with `id`; `false` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a negative amount, `StoreError::Storage` if
    /// the update fails.
    pub async fn update(
        &self,
        _grant: &AdminGrant,
        id: ExpenseId,
        input: ExpenseInput,
    ) -> Result<bool, StoreError> {
        input.validate()?;

        let result = expenses::Entity::update_many()
            .set(active_model(input))
            .filter(expenses::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await?;

        let updated = result.rows_affected > 0;
        tracing::info!(expense_id = %id, updated, "expense update");
        Ok(updated)
    }

    /// Deletes the expense with `id`; `false` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the delete fails.
    pub async fn delete(&self, _grant: &AdminGrant, id: ExpenseId) -> Result<bool, StoreError> {
        let result = expenses::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;

        let deleted = result.rows_affected > 0;
        tracing::info!(expense_id = %id, deleted, "expense delete");
        Ok(deleted)
    }
}

fn active_model(input: ExpenseInput) -> expenses::ActiveModel {
    expenses::ActiveModel {
        id: NotSet,
        description: Set(input.description),
        amount: Set(input.amount),
        date: Set(input.date),
        category: Set(input.category.into()),
    }
}
