use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::hostel::{CreateHostelParams, Hostel};

pub struct HostelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HostelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new hostel
    ///
    /// Fails with a unique constraint violation when the name is already taken.
    pub async fn create(&self, params: CreateHostelParams) -> Result<Hostel, DbErr> {
        let hostel = entity::hostel::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Hostel::from_entity(hostel))
    }

    /// Gets all hostels ordered by name, ignoring case through the column's NOCASE collation
    pub async fn get_all(&self) -> Result<Vec<Hostel>, DbErr> {
        let hostels = entity::prelude::Hostel::find()
            .order_by_asc(entity::hostel::Column::Name)
            .order_by_asc(entity::hostel::Column::Id)
            .all(self.db)
            .await?;

        Ok(hostels.into_iter().map(Hostel::from_entity).collect())
    }

    /// Checks if a hostel with the given id exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Hostel::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
