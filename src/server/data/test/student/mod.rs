use crate::server::{
    data::student::StudentRepository,
    model::student::{CreateStudentParams, UpdateStudentParams},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_hostel_id;
mod find_with_hostel;
mod get_all;
mod update;

fn create_params(student_id: &str, hostel_id: i32) -> CreateStudentParams {
    CreateStudentParams {
        student_id: student_id.to_string(),
        name: "Amy".to_string(),
        phone: String::new(),
        room_number: String::new(),
        hostel_id,
    }
}

fn empty_update(student_id: &str) -> UpdateStudentParams {
    UpdateStudentParams {
        student_id: student_id.to_string(),
        name: None,
        phone: None,
        hostel_id: None,
        room_number: None,
    }
}
