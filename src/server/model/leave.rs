//! Leave application domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        api::UpdateStatusDto,
        leave::{CreateLeaveDto, LeaveDto, StudentLeaveDto},
    },
    server::{
        error::AppError,
        model::status::{parse_stored, LeaveStatus, StatusSet},
        util::validate::{parse_date, parse_row_id, present},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveApplication {
    pub id: i32,
    pub student_id: String,
    pub hostel_id: i32,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_at: DateTime<Utc>,
}

impl LeaveApplication {
    /// # Returns
    /// - `Err(DbErr::Custom)` - Stored status is outside the leave status set
    pub fn from_entity(entity: entity::leave_application::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            student_id: entity.student_id,
            hostel_id: entity.hostel_id,
            from_date: entity.from_date,
            to_date: entity.to_date,
            reason: entity.reason,
            status: parse_stored(&entity.status)?,
            applied_at: entity.applied_at,
        })
    }

    pub fn into_student_dto(self) -> StudentLeaveDto {
        StudentLeaveDto {
            id: self.id,
            from_date: self.from_date,
            to_date: self.to_date,
            reason: self.reason,
            status: self.status.as_str().to_string(),
            applied_at: self.applied_at,
        }
    }
}

/// Leave application with the names of its owning student and hostel.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveListItem {
    pub leave: LeaveApplication,
    pub student_name: String,
    pub hostel_name: String,
}

impl LeaveListItem {
    pub fn into_dto(self) -> LeaveDto {
        LeaveDto {
            id: self.leave.id,
            student_id: self.leave.student_id,
            student_name: self.student_name,
            hostel_name: self.hostel_name,
            from_date: self.leave.from_date,
            to_date: self.leave.to_date,
            reason: self.leave.reason,
            status: self.leave.status.as_str().to_string(),
            applied_at: self.leave.applied_at,
        }
    }
}

/// Parameters for applying for leave. The hostel is resolved from the student.
#[derive(Debug, Clone)]
pub struct CreateLeaveParams {
    pub student_id: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
}

impl CreateLeaveParams {
    /// # Returns
    /// - `Ok(CreateLeaveParams)` - All fields present and both dates parse
    /// - `Err(AppError::BadRequest)` - A field is missing or blank, or a date is not
    ///   `YYYY-MM-DD`
    pub fn from_dto(dto: CreateLeaveDto) -> Result<Self, AppError> {
        let (Some(student_id), Some(from_date), Some(to_date), Some(reason)) = (
            present(dto.student_id),
            present(dto.from_date),
            present(dto.to_date),
            present(dto.reason),
        ) else {
            return Err(AppError::BadRequest(
                "student_id, from_date, to_date, reason required".to_string(),
            ));
        };

        Ok(Self {
            student_id,
            from_date: parse_date("from_date", &from_date)?,
            to_date: parse_date("to_date", &to_date)?,
            reason,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateLeaveStatusParams {
    pub id: i32,
    pub status: LeaveStatus,
}

impl UpdateLeaveStatusParams {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Status missing or not one of pending/approved/rejected
    /// - `Err(AppError::NotFound)` - Id is not an integer
    pub fn from_dto(id: &str, dto: UpdateStatusDto) -> Result<Self, AppError> {
        let status = LeaveStatus::parse(dto.status.as_deref().unwrap_or_default())?;
        let id = parse_row_id(id, "leave not found")?;

        Ok(Self { id, status })
    }
}
