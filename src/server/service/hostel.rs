use sea_orm::DatabaseConnection;

use crate::server::{
    data::hostel::HostelRepository,
    error::AppError,
    model::hostel::{CreateHostelParams, Hostel},
};

pub struct HostelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HostelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a hostel
    ///
    /// # Returns
    /// - `Ok(Hostel)` - Created hostel
    /// - `Err(AppError::Conflict)` - A hostel with that name already exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateHostelParams) -> Result<Hostel, AppError> {
        let hostel = HostelRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Hostel already exists"))?;

        tracing::info!("Created hostel {} '{}'", hostel.id, hostel.name);

        Ok(hostel)
    }

    /// Gets all hostels ordered by name
    pub async fn get_all(&self) -> Result<Vec<Hostel>, AppError> {
        Ok(HostelRepository::new(self.db).get_all().await?)
    }
}
