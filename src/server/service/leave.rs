use sea_orm::DatabaseConnection;

use crate::server::{
    data::leave::LeaveRepository,
    error::AppError,
    model::leave::{
        CreateLeaveParams, LeaveApplication, LeaveListItem, UpdateLeaveStatusParams,
    },
    service::resolution::HostelResolver,
};

pub struct LeaveService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaveService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a pending leave application filed under the student's current hostel
    ///
    /// # Returns
    /// - `Ok(LeaveApplication)` - Created application
    /// - `Err(AppError::NotFound)` - No student with that id; nothing is inserted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateLeaveParams) -> Result<LeaveApplication, AppError> {
        let hostel_id = HostelResolver::new(self.db)
            .resolve(&params.student_id)
            .await?;

        let leave = LeaveRepository::new(self.db).create(params, hostel_id).await?;

        tracing::info!(
            "Student {} applied for leave {} ({} to {})",
            leave.student_id,
            leave.id,
            leave.from_date,
            leave.to_date
        );

        Ok(leave)
    }

    /// Gets every leave application for the admin listing
    pub async fn get_all(&self) -> Result<Vec<LeaveListItem>, AppError> {
        Ok(LeaveRepository::new(self.db).get_all().await?)
    }

    /// Gets the leave applications submitted by one student
    pub async fn get_by_student(&self, student_id: &str) -> Result<Vec<LeaveApplication>, AppError> {
        Ok(LeaveRepository::new(self.db).get_by_student(student_id).await?)
    }

    /// Sets a leave application's status
    ///
    /// # Returns
    /// - `Ok(())` - Status stored
    /// - `Err(AppError::NotFound)` - No application with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_status(&self, params: UpdateLeaveStatusParams) -> Result<(), AppError> {
        let id = params.id;
        let status = params.status;

        if LeaveRepository::new(self.db).update_status(params).await? == 0 {
            return Err(AppError::NotFound("leave not found".to_string()));
        }

        tracing::info!("Leave {} set to {:?}", id, status);

        Ok(())
    }
}
