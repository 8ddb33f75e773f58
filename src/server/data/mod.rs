//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from the business logic layer. Updates
//! report the number of affected rows so that callers can map a miss to a not-found error.

pub mod admin;
pub mod hostel;
pub mod leave;
pub mod maintenance;
pub mod notice;
pub mod student;

#[cfg(test)]
mod test;
