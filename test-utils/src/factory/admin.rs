//! Admin factory for creating credential rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an admin with the given credentials.
///
/// # Returns
/// - `Ok(entity::admin::Model)` - Created admin entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_admin_with_credentials(
    db: &DatabaseConnection,
    username: impl Into<String>,
    password: impl Into<String>,
) -> Result<entity::admin::Model, DbErr> {
    entity::admin::ActiveModel {
        username: ActiveValue::Set(username.into()),
        password: ActiveValue::Set(password.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an admin named `admin_{id}` with password `password`.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin::Model, DbErr> {
    create_admin_with_credentials(db, format!("admin_{}", next_id()), "password").await
}
