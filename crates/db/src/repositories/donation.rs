//! Donation ledger repository.

use maktab_core::auth::AdminGrant;
use maktab_core::ledger::{Donation, DonationInput};
use maktab_shared::types::DonationId;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::donations;
use crate::error::StoreError;

/// Donation repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct DonationRepository {
    db: DatabaseConnection,
}

impl DonationRepository {
    /// Creates a new donation repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new donation and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a negative amount, `StoreError::Storage` if
    /// the insert fails.
    pub async fn create(
        &self,
        _grant: &AdminGrant,
        input: DonationInput,
    ) -> Result<Donation, StoreError> {
        input.validate()?;

        let model = active_model(input).insert(&self.db).await?;
        tracing::info!(donation_id = model.id, "donation created");

        Ok(model.into())
    }

    /// Returns every donation, newest date first, ties in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Donation>, StoreError> {
        let models = donations::Entity::find()
            .order_by_desc(donations::Column::Date)
            .order_by_asc(donations::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Donation::from).collect())
    }

    /// Overwrites every field of the donation with `id`.
    ///
    /// Returns `false` when no such donation exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a negative amount, `StoreError::Storage` if
    /// the update fails.
    pub async fn update(
        &self,
        _grant: &AdminGrant,
        id: DonationId,
        input: DonationInput,
    ) -> Result<bool, StoreError> {
        input.validate()?;

        let result = donations::Entity::update_many()
            .set(active_model(input))
            .filter(donations::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await?;

        let updated = result.rows_affected > 0;
        tracing::info!(donation_id = %id, updated, "donation update");
        Ok(updated)
    }

    /// Deletes the donation with `id`. Returns `false` when no such donation exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the delete fails.
    pub async fn delete(&self, _grant: &AdminGrant, id: DonationId) -> Result<bool, StoreError> {
        let result = donations::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;

        let deleted = result.rows_affected > 0;
        tracing::info!(donation_id = %id, deleted, "donation delete");
        Ok(deleted)
    }
}

fn active_model(input: DonationInput) -> donations::ActiveModel {
    donations::ActiveModel {
        id: NotSet,
        donor_name: Set(input.donor_name),
        amount: Set(input.amount),
        date: Set(input.date),
        notes: Set(input.notes),
        is_anonymous: Set(input.is_anonymous),
    }
}
