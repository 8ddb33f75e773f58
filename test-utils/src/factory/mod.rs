//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories for dependent rows take the keys of the rows
//! they reference, and `helpers` provides shortcuts that create the whole chain.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let hostel = factory::create_hostel(&db).await?;
//!     let student = factory::create_student(&db, hostel.id).await?;
//!
//!     // Create with all dependencies
//!     let (hostel, student, ticket) = factory::helpers::create_ticket_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db, hostel.id)
//!     .student_id("S1")
//!     .name("Amy")
//!     .room_number("101")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `admin` - Create admin credential rows
//! - `hostel` - Create hostel entities
//! - `student` - Create student entities
//! - `notice` - Create notice entities
//! - `maintenance_request` - Create maintenance ticket entities
//! - `leave_application` - Create leave application entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod admin;
pub mod helpers;
pub mod hostel;
pub mod leave_application;
pub mod maintenance_request;
pub mod notice;
pub mod student;

pub use admin::create_admin;
pub use hostel::create_hostel;
pub use leave_application::create_leave;
pub use maintenance_request::create_ticket;
pub use notice::create_notice;
pub use student::create_student;
