//! Maintenance ticket domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        api::UpdateStatusDto,
        maintenance::{CreateTicketDto, StudentTicketDto, TicketDto},
    },
    server::{
        error::AppError,
        model::status::{parse_stored, StatusSet, TicketStatus},
        util::validate::{parse_row_id, present},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceTicket {
    pub id: i32,
    pub student_id: String,
    pub hostel_id: i32,
    pub category: String,
    pub description: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceTicket {
    /// # Returns
    /// - `Err(DbErr::Custom)` - Stored status is outside the ticket status set
    pub fn from_entity(entity: entity::maintenance_request::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            student_id: entity.student_id,
            hostel_id: entity.hostel_id,
            category: entity.category,
            description: entity.description,
            status: parse_stored(&entity.status)?,
            created_at: entity.created_at,
        })
    }

    pub fn into_student_dto(self) -> StudentTicketDto {
        StudentTicketDto {
            id: self.id,
            category: self.category,
            description: self.description,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

/// Ticket with the names of its owning student and hostel, for the admin listing.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketListItem {
    pub ticket: MaintenanceTicket,
    pub student_name: String,
    pub hostel_name: String,
}

impl TicketListItem {
    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.ticket.id,
            student_id: self.ticket.student_id,
            student_name: self.student_name,
            hostel_name: self.hostel_name,
            category: self.ticket.category,
            description: self.ticket.description,
            status: self.ticket.status.as_str().to_string(),
            created_at: self.ticket.created_at,
        }
    }
}

/// Parameters for raising a ticket.
///
/// Carries no hostel; the hostel is resolved from the student.
#[derive(Debug, Clone)]
pub struct CreateTicketParams {
    pub student_id: String,
    pub category: String,
    pub description: String,
}

impl CreateTicketParams {
    /// # Returns
    /// - `Ok(CreateTicketParams)` - student_id, category and description present
    /// - `Err(AppError::BadRequest)` - Any of them missing or blank
    pub fn from_dto(dto: CreateTicketDto) -> Result<Self, AppError> {
        let (Some(student_id), Some(category), Some(description)) = (
            present(dto.student_id),
            present(dto.category),
            present(dto.description),
        ) else {
            return Err(AppError::BadRequest(
                "student_id, category, description required".to_string(),
            ));
        };

        Ok(Self {
            student_id,
            category,
            description,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTicketStatusParams {
    pub id: i32,
    pub status: TicketStatus,
}

impl UpdateTicketStatusParams {
    /// Status is checked before the id, so a bad status is reported even for a bad id.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Status missing or not one of open/in_progress/closed
    /// - `Err(AppError::NotFound)` - Id is not an integer, so no ticket can match it
    pub fn from_dto(id: &str, dto: UpdateStatusDto) -> Result<Self, AppError> {
        let status = TicketStatus::parse(dto.status.as_deref().unwrap_or_default())?;
        let id = parse_row_id(id, "ticket not found")?;

        Ok(Self { id, status })
    }
}
