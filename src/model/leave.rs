use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Leave application as shown to administrators, with the owning student and hostel names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaveDto {
    pub id: i32,
    pub student_id: String,
    pub student_name: String,
    pub hostel_name: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

/// Leave application as shown to the student who submitted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentLeaveDto {
    pub id: i32,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

/// Dates are `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateLeaveDto {
    pub student_id: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaveListDto {
    pub leaves: Vec<LeaveDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentLeaveListDto {
    pub leaves: Vec<StudentLeaveDto>,
}
