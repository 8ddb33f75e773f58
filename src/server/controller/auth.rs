use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{
            AdminLoginDto, AdminLoginResponseDto, LoginFailureDto, StudentLoginDto,
            StudentLoginResponseDto,
        },
    },
    server::{
        error::AppError,
        model::admin::AdminCredentials,
        service::auth::AuthService,
        state::AppState,
        util::{extract::ApiJson, validate::present},
    },
};

/// Tag for grouping login endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in as an administrator.
///
/// Compares the submitted username and password with the stored admin accounts and
/// returns the admin token on an exact match.
///
/// # Returns
/// - `200 OK` - Credentials matched
/// - `400 Bad Request` - Username or password missing
/// - `401 Unauthorized` - No account matches
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = AUTH_TAG,
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Credentials matched", body = AdminLoginResponseDto),
        (status = 400, description = "Missing credentials", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = LoginFailureDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AdminLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let credentials = AdminCredentials::from_dto(payload)?;

    let token = AuthService::new(&state.db).admin_login(credentials).await?;

    Ok(Json(AdminLoginResponseDto {
        success: true,
        token: token.to_string(),
    }))
}

/// Log in as a student.
///
/// Students identify themselves by student id alone; the response carries their record
/// and hostel name.
///
/// # Returns
/// - `200 OK` - Student found
/// - `400 Bad Request` - student_id missing
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/student/login",
    tag = AUTH_TAG,
    request_body = StudentLoginDto,
    responses(
        (status = 200, description = "Student found", body = StudentLoginResponseDto),
        (status = 400, description = "student_id missing", body = ErrorDto),
        (status = 404, description = "Student not found", body = LoginFailureDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn student_login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<StudentLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let Some(student_id) = present(payload.student_id) else {
        return Err(AppError::BadRequest("student_id required".to_string()));
    };

    let student = AuthService::new(&state.db).student_login(&student_id).await?;

    Ok(Json(StudentLoginResponseDto {
        success: true,
        student: student.into_dto(),
    }))
}
