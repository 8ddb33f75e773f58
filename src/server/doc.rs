//! OpenAPI documentation for the JSON API.
//!
//! Every handler carries a `#[utoipa::path]` annotation; this module gathers them and the
//! DTO schemas into one document served at `/api/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::model::{
    api::{ErrorDto, SuccessDto, UpdateStatusDto},
    auth::{
        AdminLoginDto, AdminLoginResponseDto, LoginFailureDto, StudentLoginDto,
        StudentLoginResponseDto,
    },
    hostel::{CreateHostelDto, HostelDto, HostelListDto},
    leave::{CreateLeaveDto, LeaveDto, LeaveListDto, StudentLeaveDto, StudentLeaveListDto},
    maintenance::{
        CreateTicketDto, StudentTicketDto, StudentTicketListDto, TicketDto, TicketListDto,
    },
    notice::{CreateNoticeDto, NoticeDto, NoticeListDto},
    student::{CreateStudentDto, StudentDto, StudentListDto, UpdateStudentDto},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hostel administration API",
        description = "Hostels, students, notices, maintenance tickets and leave applications."
    ),
    tags(
        (name = "auth", description = "Admin and student login"),
        (name = "hostel", description = "Hostel registry"),
        (name = "student", description = "Student registry"),
        (name = "notice", description = "Notice board"),
        (name = "maintenance", description = "Maintenance tickets"),
        (name = "leave", description = "Leave applications")
    ),
    paths(
        crate::server::controller::auth::admin_login,
        crate::server::controller::auth::student_login,
        crate::server::controller::hostel::list_hostels,
        crate::server::controller::hostel::create_hostel,
        crate::server::controller::student::list_students,
        crate::server::controller::student::create_student,
        crate::server::controller::student::update_student,
        crate::server::controller::student::delete_student,
        crate::server::controller::notice::list_notices,
        crate::server::controller::notice::create_notice,
        crate::server::controller::maintenance::create_ticket,
        crate::server::controller::maintenance::list_tickets,
        crate::server::controller::maintenance::list_my_tickets,
        crate::server::controller::maintenance::update_ticket_status,
        crate::server::controller::leave::create_leave,
        crate::server::controller::leave::list_leaves,
        crate::server::controller::leave::list_my_leaves,
        crate::server::controller::leave::update_leave_status,
    ),
    components(schemas(
        ErrorDto,
        SuccessDto,
        UpdateStatusDto,
        AdminLoginDto,
        AdminLoginResponseDto,
        StudentLoginDto,
        StudentLoginResponseDto,
        LoginFailureDto,
        HostelDto,
        CreateHostelDto,
        HostelListDto,
        StudentDto,
        CreateStudentDto,
        UpdateStudentDto,
        StudentListDto,
        NoticeDto,
        CreateNoticeDto,
        NoticeListDto,
        TicketDto,
        StudentTicketDto,
        CreateTicketDto,
        TicketListDto,
        StudentTicketListDto,
        LeaveDto,
        StudentLeaveDto,
        CreateLeaveDto,
        LeaveListDto,
        StudentLeaveListDto,
    ))
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
