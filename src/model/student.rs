use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub student_id: String,
    pub name: String,
    pub phone: String,
    pub room_number: String,
    pub hostel_id: i32,
    pub hostel_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    pub student_id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub hostel_id: Option<i32>,
    pub room_number: Option<String>,
}

/// Fields that may be changed on an existing student. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub hostel_id: Option<i32>,
    pub room_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentListDto {
    pub students: Vec<StudentDto>,
}
