//! Resolution of the hostel a ticket or leave application belongs to.
//!
//! Records raised by a student are filed under the hostel the student lives in at the time
//! of creation. The hostel is always read from the student row; a hostel sent by the client
//! is never consulted.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository, error::AppError, model::student::DerivedHostelId,
};

pub struct HostelResolver<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HostelResolver<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up the hostel the given student currently lives in.
    ///
    /// # Returns
    /// - `Ok(DerivedHostelId)` - Student exists
    /// - `Err(AppError::NotFound)` - No student with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn resolve(&self, student_id: &str) -> Result<DerivedHostelId, AppError> {
        StudentRepository::new(self.db)
            .find_hostel_id(student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }
}
