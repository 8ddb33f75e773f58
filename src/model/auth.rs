use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::student::StudentDto;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AdminLoginDto {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminLoginResponseDto {
    pub success: bool,
    pub token: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StudentLoginDto {
    pub student_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentLoginResponseDto {
    pub success: bool,
    pub student: StudentDto,
}

/// Body returned when a login attempt does not match a stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginFailureDto {
    pub success: bool,
    pub message: String,
}
