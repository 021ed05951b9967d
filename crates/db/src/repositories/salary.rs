//! Salary ledger repository.

use maktab_core::auth::AdminGrant;
use maktab_core::ledger::{Salary, SalaryInput};
use maktab_shared::types::SalaryId;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::salaries;
use crate::error::StoreError;

/// Salary repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SalaryRepository {
    db: DatabaseConnection,
}

impl SalaryRepository {
    /// Creates a new salary repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a salary payment.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a negative amount, `StoreError::Storage` if
    /// the insert fails.
    pub async fn create(
        &self,
        _grant: &AdminGrant,
        input: SalaryInput,
    ) -> Result<Salary, StoreError> {
        input.validate()?;

        let model = active_model(input).insert(&self.db).await?;
        tracing::info!(salary_id = model.id, "salary created");

        Ok(model.into())
    }

    /// Returns every salary payment, newest date first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Salary>, StoreError> {
        let models = salaries::Entity::find()
            .order_by_desc(salaries::Column::Date)
            .order_by_asc(salaries::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Salary::from).collect())
    }

    /// Overwrites every field of the payment with `id`; `false` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a negative amount, `StoreError::Storage` if
    /// the update fails.
    pub async fn update(
        &self,
        _grant: &AdminGrant,
        id: SalaryId,
        input: SalaryInput,
    ) -> Result<bool, StoreError> {
        input.validate()?;

        let result = salaries::Entity::update_many()
            .set(active_model(input))
            .filter(salaries::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await?;

        let updated = result.rows_affected > 0;
        tracing::info!(salary_id = %id, updated, "salary update");
        Ok(updated)
    }

    /// Deletes the payment with `id`; `false` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the delete fails.
    pub async fn delete(&self, _grant: &AdminGrant, id: SalaryId) -> Result<bool, StoreError> {
        let result = salaries::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;

        let deleted = result.rows_affected > 0;
        tracing::info!(salary_id = %id, deleted, "salary delete");
        Ok(deleted)
    }
}

fn active_model(input: SalaryInput) -> salaries::ActiveModel {
    salaries::ActiveModel {
        id: NotSet,
        teacher_name: Set(input.teacher_name),
        amount: Set(input.amount),
        date: Set(input.date),
    }
}
