use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ticket as shown to administrators, with the owning student and hostel names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketDto {
    pub id: i32,
    pub student_id: String,
    pub student_name: String,
    pub hostel_name: String,
    pub category: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Ticket as shown to the student who raised it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentTicketDto {
    pub id: i32,
    pub category: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTicketDto {
    pub student_id: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketListDto {
    pub tickets: Vec<TicketDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentTicketListDto {
    pub tickets: Vec<StudentTicketDto>,
}
