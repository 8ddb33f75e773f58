mod admin;
mod hostel;
mod leave;
mod maintenance;
mod notice;
mod student;
