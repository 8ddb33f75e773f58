use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        hostel::{CreateHostelDto, HostelListDto},
    },
    server::{
        error::AppError, model::hostel::CreateHostelParams, service::hostel::HostelService,
        state::AppState, util::extract::ApiJson,
    },
};

/// Tag for grouping hostel endpoints in OpenAPI documentation
pub static HOSTEL_TAG: &str = "hostel";

/// List all hostels, alphabetically by name.
#[utoipa::path(
    get,
    path = "/api/hostels",
    tag = HOSTEL_TAG,
    responses(
        (status = 200, description = "All hostels", body = HostelListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_hostels(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let hostels = HostelService::new(&state.db).get_all().await?;

    Ok(Json(HostelListDto {
        hostels: hostels.into_iter().map(|h| h.into_dto()).collect(),
    }))
}

/// Create a hostel.
///
/// # Returns
/// - `200 OK` - Hostel created
/// - `400 Bad Request` - Name missing, or a hostel with that name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/hostels",
    tag = HOSTEL_TAG,
    request_body = CreateHostelDto,
    responses(
        (status = 200, description = "Hostel created", body = SuccessDto),
        (status = 400, description = "Name missing or already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hostel(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateHostelDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateHostelParams::from_dto(payload)?;

    HostelService::new(&state.db).create(params).await?;

    Ok(Json(SuccessDto::ok()))
}
