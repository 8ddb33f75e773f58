//! SeaORM entity definitions for the hostel administration schema.

pub mod prelude;

pub mod admin;
pub mod hostel;
pub mod leave_application;
pub mod maintenance_request;
pub mod notice;
pub mod student;
