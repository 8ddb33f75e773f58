use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        notice::{CreateNoticeDto, NoticeListDto},
    },
    server::{
        error::AppError,
        model::notice::CreateNoticeParams,
        service::notice::NoticeService,
        state::AppState,
        util::{extract::ApiJson, validate::parse_optional_id},
    },
};

/// Tag for grouping notice endpoints in OpenAPI documentation
pub static NOTICE_TAG: &str = "notice";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NoticeQuery {
    /// Restrict to notices for everyone plus notices for this hostel. Empty means no filter.
    pub hostel_id: Option<String>,
}

/// List notices, newest first.
///
/// # Returns
/// - `200 OK` - Matching notices
/// - `400 Bad Request` - `hostel_id` is not an integer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notices",
    tag = NOTICE_TAG,
    params(NoticeQuery),
    responses(
        (status = 200, description = "Matching notices", body = NoticeListDto),
        (status = 400, description = "hostel_id is not an integer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_notices(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let hostel_id = parse_optional_id("hostel_id", query.hostel_id)?;

    let notices = NoticeService::new(&state.db).get_visible(hostel_id).await?;

    Ok(Json(NoticeListDto {
        notices: notices.into_iter().map(|n| n.into_dto()).collect(),
    }))
}

/// Post a notice.
///
/// An audience other than `hostel` is stored as `all`, and an `all` notice never keeps a
/// hostel id. A `hostel` notice must name an existing hostel.
#[utoipa::path(
    post,
    path = "/api/notices",
    tag = NOTICE_TAG,
    request_body = CreateNoticeDto,
    responses(
        (status = 200, description = "Notice posted", body = SuccessDto),
        (status = 400, description = "Title or body missing", body = ErrorDto),
        (status = 404, description = "Hostel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_notice(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateNoticeDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateNoticeParams::from_dto(payload)?;

    NoticeService::new(&state.db).create(params).await?;

    Ok(Json(SuccessDto::ok()))
}
