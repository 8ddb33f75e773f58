use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{
        auth::{admin_login, student_login},
        hostel::{create_hostel, list_hostels},
        leave::{create_leave, list_leaves, list_my_leaves, update_leave_status},
        maintenance::{create_ticket, list_my_tickets, list_tickets, update_ticket_status},
        notice::{create_notice, list_notices},
        student::{create_student, delete_student, list_students, update_student},
    },
    doc::openapi,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/openapi.json", get(openapi))
        .route("/api/admin/login", post(admin_login))
        .route("/api/student/login", post(student_login))
        .route("/api/hostels", get(list_hostels).post(create_hostel))
        .route("/api/students", get(list_students).post(create_student))
        .route(
            "/api/students/{student_id}",
            put(update_student).delete(delete_student),
        )
        .route("/api/notices", get(list_notices).post(create_notice))
        .route("/api/maintenance", get(list_tickets).post(create_ticket))
        .route("/api/maintenance/mine/{student_id}", get(list_my_tickets))
        .route("/api/maintenance/{id}/status", put(update_ticket_status))
        .route("/api/leaves", get(list_leaves).post(create_leave))
        .route("/api/leaves/mine/{student_id}", get(list_my_leaves))
        .route("/api/leaves/{id}/status", put(update_leave_status))
}
