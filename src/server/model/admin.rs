//! Admin login parameters.

use crate::{
    model::auth::AdminLoginDto,
    server::{error::AppError, util::validate::present},
};

/// Username/password pair submitted to the admin login endpoint.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    /// # Returns
    /// - `Ok(AdminCredentials)` - Both fields present
    /// - `Err(AppError::BadRequest)` - Either field missing or blank
    pub fn from_dto(dto: AdminLoginDto) -> Result<Self, AppError> {
        let (Some(username), Some(password)) = (present(dto.username), present(dto.password))
        else {
            return Err(AppError::BadRequest("Missing credentials".to_string()));
        };

        Ok(Self { username, password })
    }
}
