use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto, UpdateStatusDto},
        leave::{CreateLeaveDto, LeaveListDto, StudentLeaveListDto},
    },
    server::{
        error::AppError,
        model::leave::{CreateLeaveParams, UpdateLeaveStatusParams},
        service::leave::LeaveService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping leave endpoints in OpenAPI documentation
pub static LEAVE_TAG: &str = "leave";

/// Apply for leave.
///
/// Dates are `YYYY-MM-DD`. The application is filed under the student's current hostel
/// and starts out `pending`.
///
/// # Returns
/// - `200 OK` - Application submitted
/// - `400 Bad Request` - Required field missing or a date is malformed
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/leaves",
    tag = LEAVE_TAG,
    request_body = CreateLeaveDto,
    responses(
        (status = 200, description = "Application submitted", body = SuccessDto),
        (status = 400, description = "Missing field or malformed date", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_leave(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateLeaveDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateLeaveParams::from_dto(payload)?;

    LeaveService::new(&state.db).create(params).await?;

    Ok(Json(SuccessDto::ok()))
}

/// List every leave application, newest first.
#[utoipa::path(
    get,
    path = "/api/leaves",
    tag = LEAVE_TAG,
    responses(
        (status = 200, description = "All leave applications", body = LeaveListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_leaves(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let leaves = LeaveService::new(&state.db).get_all().await?;

    Ok(Json(LeaveListDto {
        leaves: leaves.into_iter().map(|l| l.into_dto()).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/leaves/mine/{student_id}",
    tag = LEAVE_TAG,
    params(
        ("student_id" = String, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "The student's leave applications", body = StudentLeaveListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_leaves(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let leaves = LeaveService::new(&state.db)
        .get_by_student(&student_id)
        .await?;

    Ok(Json(StudentLeaveListDto {
        leaves: leaves.into_iter().map(|l| l.into_student_dto()).collect(),
    }))
}

/// Approve or reject a leave application.
///
/// Accepts `pending`, `approved` or `rejected`.
#[utoipa::path(
    put,
    path = "/api/leaves/{id}/status",
    tag = LEAVE_TAG,
    params(
        ("id" = i32, Path, description = "Leave application id")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = SuccessDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Leave application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_leave_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateLeaveStatusParams::from_dto(&id, payload)?;

    LeaveService::new(&state.db).update_status(params).await?;

    Ok(Json(SuccessDto::ok()))
}
