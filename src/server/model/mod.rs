//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from
//! request DTOs and carry the required-field validation, so a parameter value that
//! exists has already passed the presence checks.

pub mod admin;
pub mod hostel;
pub mod leave;
pub mod maintenance;
pub mod notice;
pub mod status;
pub mod student;
