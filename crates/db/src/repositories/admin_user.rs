//! Admin identity repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entities::admin_users;

/// Admin user repository for credential storage.
#[derive(Debug, Clone)]
pub struct AdminUserRepository {
    db: DatabaseConnection,
}

impl AdminUserRepository {
    /// Creates a new admin user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Number of stored admin identities.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr> {
        admin_users::Entity::find().count(&self.db).await
    }

    /// Finds an admin by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<admin_users::Model>, DbErr> {
        admin_users::Entity::find()
            .filter(admin_users::Column::Username.eq(username))
            .one(&self.db)
            .await
    }

    /// Stores a new admin identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including a duplicate username.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<admin_users::Model, DbErr> {
        admin_users::ActiveModel {
            id: NotSet,
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
        }
        .insert(&self.db)
        .await
    }

    /// Replaces the stored hash for `username`. Returns `false` if the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub async fn update_password_hash(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, DbErr> {
        let result = admin_users::Entity::update_many()
            .set(admin_users::ActiveModel {
                password_hash: Set(password_hash.to_string()),
                ..Default::default()
            })
            .filter(admin_users::Column::Username.eq(username))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
