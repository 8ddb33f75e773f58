//! HTTP request handlers.
//!
//! Controllers extract path, query and body data, convert request DTOs into server-side
//! parameter types (which performs required-field validation), call the matching service,
//! and convert the resulting domain models into response DTOs. Every handler returns
//! `Result<impl IntoResponse, AppError>` so errors map onto the JSON error shapes in one
//! place.

pub mod auth;
pub mod hostel;
pub mod leave;
pub mod maintenance;
pub mod notice;
pub mod student;
