//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db, hostel.id)
///     .student_id("S1")
///     .name("Amy")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: String,
    name: String,
    phone: String,
    room_number: String,
    hostel_id: i32,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - student_id: `"STU{id}"` where id is auto-incremented
    /// - name: `"Student {id}"`
    /// - phone: `"555-{id}"`
    /// - room_number: `"{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `hostel_id` - Hostel the student lives in
    pub fn new(db: &'a DatabaseConnection, hostel_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            student_id: format!("STU{}", id),
            name: format!("Student {}", id),
            phone: format!("555-{}", id),
            room_number: id.to_string(),
            hostel_id,
        }
    }

    /// Sets the student's natural key.
    pub fn student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = student_id.into();
        self
    }

    /// Sets the student's name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the student's phone number.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the student's room number.
    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown hostel)
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            room_number: ActiveValue::Set(self.room_number),
            hostel_id: ActiveValue::Set(self.hostel_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values in the given hostel.
pub async fn create_student(
    db: &DatabaseConnection,
    hostel_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, hostel_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_student_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Hostel)
            .with_table(Student)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let hostel = factory::create_hostel(db).await?;
        let student = create_student(db, hostel.id).await?;

        assert!(student.student_id.starts_with("STU"));
        assert_eq!(student.hostel_id, hostel.id);

        Ok(())
    }

    #[tokio::test]
    async fn creates_student_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Hostel)
            .with_table(Student)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let hostel = factory::create_hostel(db).await?;
        let student = StudentFactory::new(db, hostel.id)
            .student_id("S1")
            .name("Amy")
            .phone("")
            .room_number("101")
            .build()
            .await?;

        assert_eq!(student.student_id, "S1");
        assert_eq!(student.name, "Amy");
        assert_eq!(student.phone, "");
        assert_eq!(student.room_number, "101");

        Ok(())
    }
}
