//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a hostel and a student living in it, both with default values.
///
/// # Returns
/// - `Ok((hostel, student))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_hostel(
    db: &DatabaseConnection,
) -> Result<(entity::hostel::Model, entity::student::Model), DbErr> {
    let hostel = crate::factory::hostel::create_hostel(db).await?;
    let student = crate::factory::student::create_student(db, hostel.id).await?;

    Ok((hostel, student))
}

/// Creates a hostel, a student and one open maintenance ticket raised by that student.
///
/// # Returns
/// - `Ok((hostel, student, ticket))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_ticket_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::hostel::Model,
        entity::student::Model,
        entity::maintenance_request::Model,
    ),
    DbErr,
> {
    let (hostel, student) = create_student_with_hostel(db).await?;
    let ticket = crate::factory::maintenance_request::create_ticket(db, &student).await?;

    Ok((hostel, student, ticket))
}

/// Creates a hostel, a student and one pending leave application from that student.
///
/// # Returns
/// - `Ok((hostel, student, leave))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_leave_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::hostel::Model,
        entity::student::Model,
        entity::leave_application::Model,
    ),
    DbErr,
> {
    let (hostel, student) = create_student_with_hostel(db).await?;
    let leave = crate::factory::leave_application::create_leave(db, &student).await?;

    Ok((hostel, student, leave))
}
