use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto, UpdateStatusDto},
        maintenance::{CreateTicketDto, StudentTicketListDto, TicketListDto},
    },
    server::{
        error::AppError,
        model::maintenance::{CreateTicketParams, UpdateTicketStatusParams},
        service::maintenance::MaintenanceService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping maintenance endpoints in OpenAPI documentation
pub static MAINTENANCE_TAG: &str = "maintenance";

/// Raise a maintenance ticket.
///
/// The ticket is filed under the hostel the student currently lives in and starts out
/// `open`.
///
/// # Returns
/// - `200 OK` - Ticket raised
/// - `400 Bad Request` - Required field missing
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/maintenance",
    tag = MAINTENANCE_TAG,
    request_body = CreateTicketDto,
    responses(
        (status = 200, description = "Ticket raised", body = SuccessDto),
        (status = 400, description = "Required field missing", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateTicketParams::from_dto(payload)?;

    MaintenanceService::new(&state.db).create(params).await?;

    Ok(Json(SuccessDto::ok()))
}

/// List every ticket, newest first, with student and hostel names.
#[utoipa::path(
    get,
    path = "/api/maintenance",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "All tickets", body = TicketListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tickets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tickets = MaintenanceService::new(&state.db).get_all().await?;

    Ok(Json(TicketListDto {
        tickets: tickets.into_iter().map(|t| t.into_dto()).collect(),
    }))
}

/// List the tickets raised by one student, newest first.
///
/// An unknown student id yields an empty list.
#[utoipa::path(
    get,
    path = "/api/maintenance/mine/{student_id}",
    tag = MAINTENANCE_TAG,
    params(
        ("student_id" = String, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "The student's tickets", body = StudentTicketListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_tickets(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tickets = MaintenanceService::new(&state.db)
        .get_by_student(&student_id)
        .await?;

    Ok(Json(StudentTicketListDto {
        tickets: tickets.into_iter().map(|t| t.into_student_dto()).collect(),
    }))
}

/// Set a ticket's status.
///
/// Accepts `open`, `in_progress` or `closed`, in any order.
///
/// # Returns
/// - `200 OK` - Status updated
/// - `400 Bad Request` - Status not in the accepted set
/// - `404 Not Found` - No ticket with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/maintenance/{id}/status",
    tag = MAINTENANCE_TAG,
    params(
        ("id" = i32, Path, description = "Ticket id")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = SuccessDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ticket_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateTicketStatusParams::from_dto(&id, payload)?;

    MaintenanceService::new(&state.db).update_status(params).await?;

    Ok(Json(SuccessDto::ok()))
}
