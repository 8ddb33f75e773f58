//! Leave application factory.
//!
//! Applications copy their hostel from the owning student, mirroring what the application does.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test leave applications.
pub struct LeaveFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: String,
    hostel_id: i32,
    from_date: NaiveDate,
    to_date: NaiveDate,
    reason: String,
    status: String,
    applied_at: DateTime<Utc>,
}

impl<'a> LeaveFactory<'a> {
    /// Creates a new LeaveFactory for the given student.
    ///
    /// Defaults:
    /// - from_date: today, to_date: two days later
    /// - reason: `"Reason {id}"`
    /// - status: `"pending"`
    /// - applied_at: now
    pub fn new(db: &'a DatabaseConnection, student: &entity::student::Model) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            student_id: student.student_id.clone(),
            hostel_id: student.hostel_id,
            from_date: today,
            to_date: today + Duration::days(2),
            reason: format!("Reason {}", id),
            status: "pending".to_string(),
            applied_at: Utc::now(),
        }
    }

    /// Sets the leave dates.
    pub fn dates(mut self, from_date: NaiveDate, to_date: NaiveDate) -> Self {
        self.from_date = from_date;
        self.to_date = to_date;
        self
    }

    /// Sets the raw status value stored in the row.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the application timestamp.
    pub fn applied_at(mut self, applied_at: DateTime<Utc>) -> Self {
        self.applied_at = applied_at;
        self
    }

    /// Builds and inserts the leave application into the database.
    pub async fn build(self) -> Result<entity::leave_application::Model, DbErr> {
        entity::leave_application::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            hostel_id: ActiveValue::Set(self.hostel_id),
            from_date: ActiveValue::Set(self.from_date),
            to_date: ActiveValue::Set(self.to_date),
            reason: ActiveValue::Set(self.reason),
            status: ActiveValue::Set(self.status),
            applied_at: ActiveValue::Set(self.applied_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending leave application with default values for the given student.
pub async fn create_leave(
    db: &DatabaseConnection,
    student: &entity::student::Model,
) -> Result<entity::leave_application::Model, DbErr> {
    LeaveFactory::new(db, student).build().await
}
