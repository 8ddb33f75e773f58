use sea_orm::DatabaseConnection;

use crate::server::{
    data::{admin::AdminRepository, student::StudentRepository},
    error::{auth::AuthError, AppError},
    model::{admin::AdminCredentials, student::StudentWithHostel},
};

/// Fixed token returned on every successful admin login. No endpoint checks it.
pub const ADMIN_TOKEN: &str = "ADMIN-DEMO";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks admin credentials against the stored accounts.
    ///
    /// # Returns
    /// - `Ok(&str)` - The admin token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No account matches
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn admin_login(&self, credentials: AdminCredentials) -> Result<&'static str, AppError> {
        let admin = AdminRepository::new(self.db)
            .find_by_credentials(&credentials.username, &credentials.password)
            .await?;

        match admin {
            Some(admin) => {
                tracing::info!("Admin '{}' logged in", admin.username);
                Ok(ADMIN_TOKEN)
            }
            None => {
                tracing::debug!("Rejected admin login for '{}'", credentials.username);
                Err(AuthError::InvalidCredentials.into())
            }
        }
    }

    /// Identifies a student by id.
    ///
    /// # Returns
    /// - `Ok(StudentWithHostel)` - The student with their hostel name
    /// - `Err(AppError::AuthErr(StudentNotFound))` - No student with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn student_login(&self, student_id: &str) -> Result<StudentWithHostel, AppError> {
        StudentRepository::new(self.db)
            .find_with_hostel(student_id)
            .await?
            .ok_or_else(|| AuthError::StudentNotFound.into())
    }
}
