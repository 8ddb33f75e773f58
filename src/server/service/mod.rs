//! Business logic layer.
//!
//! Services sit between controllers and repositories. They enforce the rules that need
//! storage access (hostel existence, deriving a record's hostel from its student), map
//! storage outcomes such as unique violations and zero-row updates onto `AppError`, and log
//! every successful write.

pub mod auth;
pub mod hostel;
pub mod leave;
pub mod maintenance;
pub mod notice;
pub mod resolution;
pub mod student;
