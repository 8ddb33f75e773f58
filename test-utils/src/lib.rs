//! Hostel Admin Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the hostel
//! administration backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas, plus factories for seeding rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Per-entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_students() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_hostel_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (hostel, student) = factory::helpers::create_student_with_hostel(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
