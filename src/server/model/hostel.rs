//! Hostel domain models and parameters.

use crate::{
    model::hostel::{CreateHostelDto, HostelDto},
    server::{error::AppError, util::validate::present},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Hostel {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}

impl Hostel {
    pub fn from_entity(entity: entity::hostel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
        }
    }

    pub fn into_dto(self) -> HostelDto {
        HostelDto {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }
}

/// Parameters for creating a hostel. A blank address is stored as null.
#[derive(Debug, Clone)]
pub struct CreateHostelParams {
    pub name: String,
    pub address: Option<String>,
}

impl CreateHostelParams {
    /// # Returns
    /// - `Ok(CreateHostelParams)` - Name present
    /// - `Err(AppError::BadRequest)` - Name missing or blank
    pub fn from_dto(dto: CreateHostelDto) -> Result<Self, AppError> {
        let Some(name) = present(dto.name) else {
            return Err(AppError::BadRequest("name required".to_string()));
        };

        Ok(Self {
            name,
            address: present(dto.address),
        })
    }
}
