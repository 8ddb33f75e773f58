use chrono::NaiveDate;

use crate::server::error::AppError;

/// Treats a text field as present only if it is non-empty after trimming.
///
/// The stored value is the original, untrimmed text.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Arguments
/// - `field` - Name of the request field, used in the error message
/// - `value` - The text to parse
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(AppError::BadRequest)` - Not a valid `YYYY-MM-DD` date
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("{} must be a YYYY-MM-DD date", field)))
}

/// Parses an optional numeric query parameter where an empty value means "not given".
///
/// # Returns
/// - `Ok(None)` - Parameter absent or blank
/// - `Ok(Some(i32))` - Parameter parsed
/// - `Err(AppError::BadRequest)` - Parameter is not an integer
pub fn parse_optional_id(field: &str, value: Option<String>) -> Result<Option<i32>, AppError> {
    match present(value) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("{} must be an integer", field))),
    }
}

/// Parses a row id taken from the URL path.
///
/// Ids that are not integers, or do not fit the id column, cannot match any row and
/// answer `AppError::NotFound` with `not_found`.
pub fn parse_row_id(raw: &str, not_found: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(not_found.to_string()))
}
