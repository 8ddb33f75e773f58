use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::auth::LoginFailureDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Username/password pair does not match any stored admin.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No student with the given id exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("Student not found")]
    StudentNotFound,
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants answer with `{success: false, message}` so login clients can branch on
/// `success` alone:
/// - `InvalidCredentials` → 401 Unauthorized
/// - `StudentNotFound` → 404 Not Found
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::StudentNotFound => StatusCode::NOT_FOUND,
        };

        tracing::debug!("Rejected login: {}", self);

        (
            status,
            Json(LoginFailureDto {
                success: false,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
