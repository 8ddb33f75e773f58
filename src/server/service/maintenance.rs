use sea_orm::DatabaseConnection;

use crate::server::{
    data::maintenance::MaintenanceRepository,
    error::AppError,
    model::maintenance::{
        CreateTicketParams, MaintenanceTicket, TicketListItem, UpdateTicketStatusParams,
    },
    service::resolution::HostelResolver,
};

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Raises an open ticket filed under the student's current hostel
    ///
    /// # Returns
    /// - `Ok(MaintenanceTicket)` - Created ticket
    /// - `Err(AppError::NotFound)` - No student with that id; nothing is inserted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateTicketParams) -> Result<MaintenanceTicket, AppError> {
        let hostel_id = HostelResolver::new(self.db)
            .resolve(&params.student_id)
            .await?;

        let ticket = MaintenanceRepository::new(self.db)
            .create(params, hostel_id)
            .await?;

        tracing::info!(
            "Student {} raised ticket {} ({})",
            ticket.student_id,
            ticket.id,
            ticket.category
        );

        Ok(ticket)
    }

    /// Gets every ticket for the admin listing
    pub async fn get_all(&self) -> Result<Vec<TicketListItem>, AppError> {
        Ok(MaintenanceRepository::new(self.db).get_all().await?)
    }

    /// Gets the tickets raised by one student
    pub async fn get_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<MaintenanceTicket>, AppError> {
        Ok(MaintenanceRepository::new(self.db)
            .get_by_student(student_id)
            .await?)
    }

    /// Sets a ticket's status
    ///
    /// # Returns
    /// - `Ok(())` - Status stored
    /// - `Err(AppError::NotFound)` - No ticket with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_status(&self, params: UpdateTicketStatusParams) -> Result<(), AppError> {
        let id = params.id;
        let status = params.status;

        if MaintenanceRepository::new(self.db)
            .update_status(params)
            .await?
            == 0
        {
            return Err(AppError::NotFound("ticket not found".to_string()));
        }

        tracing::info!("Ticket {} set to {:?}", id, status);

        Ok(())
    }
}
