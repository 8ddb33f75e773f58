//! Request and response DTOs for the JSON API.
//!
//! DTOs mirror the wire format exactly. Request DTOs keep every field optional so that
//! missing fields are reported as validation errors by the server models rather than as
//! deserialization failures.

pub mod api;
pub mod auth;
pub mod hostel;
pub mod leave;
pub mod maintenance;
pub mod notice;
pub mod student;
