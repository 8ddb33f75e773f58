use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        student::{CreateStudentDto, StudentListDto, UpdateStudentDto},
    },
    server::{
        error::AppError,
        model::student::{CreateStudentParams, UpdateStudentParams},
        service::student::StudentService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// List all students with their hostel names.
///
/// Ordered by hostel name, then room number, then student name.
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All students", body = StudentListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;

    Ok(Json(StudentListDto {
        students: students.into_iter().map(|s| s.into_dto()).collect(),
    }))
}

/// Register a student.
///
/// # Returns
/// - `200 OK` - Student registered
/// - `400 Bad Request` - Required field missing, or student_id already taken
/// - `404 Not Found` - The hostel does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 200, description = "Student registered", body = SuccessDto),
        (status = 400, description = "Missing field or duplicate student_id", body = ErrorDto),
        (status = 404, description = "Hostel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateStudentParams::from_dto(payload)?;

    StudentService::new(&state.db).create(params).await?;

    Ok(Json(SuccessDto::ok()))
}

/// Update a student.
///
/// Only the fields present in the body are changed. The student id itself cannot be
/// changed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `student_id` - Id of the student to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Student updated
/// - `404 Not Found` - The student, or the requested hostel, does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = String, Path, description = "Student id")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = SuccessDto),
        (status = 404, description = "Student or hostel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateStudentParams::from_dto(student_id, payload);

    StudentService::new(&state.db).update(params).await?;

    Ok(Json(SuccessDto::ok()))
}

/// Delete a student along with their tickets and leave applications.
#[utoipa::path(
    delete,
    path = "/api/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = String, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Student deleted", body = SuccessDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db).delete(&student_id).await?;

    Ok(Json(SuccessDto::ok()))
}
