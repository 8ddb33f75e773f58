//! Student domain models and parameters.
//!
//! Students are keyed by their institution-issued `student_id`, which is fixed at creation:
//! update parameters carry it only as the lookup key and never write it.

use crate::{
    model::student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    server::{error::AppError, util::validate::present},
};

/// Student row as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    pub phone: String,
    pub room_number: String,
    pub hostel_id: i32,
}

impl Student {
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            student_id: entity.student_id,
            name: entity.name,
            phone: entity.phone,
            room_number: entity.room_number,
            hostel_id: entity.hostel_id,
        }
    }
}

/// Student joined with the name of their hostel, as listed and returned on login.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentWithHostel {
    pub student: Student,
    pub hostel_name: String,
}

impl StudentWithHostel {
    pub fn from_entity(entity: entity::student::Model, hostel: entity::hostel::Model) -> Self {
        Self {
            student: Student::from_entity(entity),
            hostel_name: hostel.name,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            student_id: self.student.student_id,
            name: self.student.name,
            phone: self.student.phone,
            room_number: self.student.room_number,
            hostel_id: self.student.hostel_id,
            hostel_name: self.hostel_name,
        }
    }
}

/// Parameters for creating a student. Omitted phone and room number are stored empty.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub student_id: String,
    pub name: String,
    pub phone: String,
    pub room_number: String,
    pub hostel_id: i32,
}

impl CreateStudentParams {
    /// # Returns
    /// - `Ok(CreateStudentParams)` - student_id, name and hostel_id present
    /// - `Err(AppError::BadRequest)` - Any of them missing or blank
    pub fn from_dto(dto: CreateStudentDto) -> Result<Self, AppError> {
        let (Some(student_id), Some(name), Some(hostel_id)) =
            (present(dto.student_id), present(dto.name), dto.hostel_id)
        else {
            return Err(AppError::BadRequest(
                "student_id, name, hostel_id required".to_string(),
            ));
        };

        Ok(Self {
            student_id,
            name,
            phone: dto.phone.unwrap_or_default(),
            room_number: dto.room_number.unwrap_or_default(),
            hostel_id,
        })
    }
}

/// Parameters for updating a student. `None` leaves the stored value unchanged.
#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub student_id: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub hostel_id: Option<i32>,
    pub room_number: Option<String>,
}

impl UpdateStudentParams {
    pub fn from_dto(student_id: String, dto: UpdateStudentDto) -> Self {
        Self {
            student_id,
            // Blank names are ignored
            name: present(dto.name),
            phone: dto.phone,
            hostel_id: dto.hostel_id,
            room_number: dto.room_number,
        }
    }

    /// Whether the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.hostel_id.is_none()
            && self.room_number.is_none()
    }
}

/// Hostel id taken from a student's current record.
///
/// Tickets and leave applications store this instead of any hostel sent by the client, so
/// the only way to obtain one is from a stored student row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedHostelId(i32);

impl DerivedHostelId {
    pub fn from_student(student: &entity::student::Model) -> Self {
        Self(student.hostel_id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}
