//! Maintenance ticket factory.
//!
//! Tickets copy their hostel from the owning student, mirroring what the application does.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test maintenance tickets.
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: String,
    hostel_id: i32,
    category: String,
    description: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory for the given student.
    ///
    /// Defaults:
    /// - category: `"electrical"`
    /// - description: `"Issue {id}"`
    /// - status: `"open"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, student: &entity::student::Model) -> Self {
        let id = next_id();
        Self {
            db,
            student_id: student.student_id.clone(),
            hostel_id: student.hostel_id,
            category: "electrical".to_string(),
            description: format!("Issue {}", id),
            status: "open".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Sets the ticket category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the raw status value stored in the row.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the ticket entity into the database.
    pub async fn build(self) -> Result<entity::maintenance_request::Model, DbErr> {
        entity::maintenance_request::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            hostel_id: ActiveValue::Set(self.hostel_id),
            category: ActiveValue::Set(self.category),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open ticket with default values for the given student.
pub async fn create_ticket(
    db: &DatabaseConnection,
    student: &entity::student::Model,
) -> Result<entity::maintenance_request::Model, DbErr> {
    TicketFactory::new(db, student).build().await
}
