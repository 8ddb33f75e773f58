use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an admin account
    pub async fn create(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password: ActiveValue::Set(password.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the admin whose username and password both match exactly
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::Username.eq(username))
            .filter(entity::admin::Column::Password.eq(password))
            .one(self.db)
            .await
    }

    /// Checks if an admin with the given username exists
    pub async fn exists_by_username(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Admin::find()
            .filter(entity::admin::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
