//! Status whitelists for maintenance tickets and leave applications.
//!
//! A requested status is accepted when it is a member of the entity's fixed set. There is
//! no transition graph: any member may replace any other, including moving a closed ticket
//! back to open.

use crate::server::error::AppError;

/// A closed set of status values stored as lowercase strings.
pub trait StatusSet: Sized + Copy + 'static {
    /// Every accepted value, in display order.
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    /// Looks up `value` in the set.
    ///
    /// # Returns
    /// - `Ok(Self)` - `value` exactly matches a member
    /// - `Err(AppError::BadRequest)` - Anything else, including case variants
    fn parse(value: &str) -> Result<Self, AppError> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| AppError::BadRequest("invalid status".to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    InProgress,
    Closed,
}

impl StatusSet for TicketStatus {
    const ALL: &'static [Self] = &[Self::Open, Self::InProgress, Self::Closed];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl StatusSet for LeaveStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Approved, Self::Rejected];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Parses a status read back from storage.
///
/// Rows are only ever written through `StatusSet::as_str`, so a failure here means the
/// table was edited out of band.
pub fn parse_stored<S: StatusSet>(value: &str) -> Result<S, sea_orm::DbErr> {
    S::parse(value)
        .map_err(|_| sea_orm::DbErr::Custom(format!("Unknown status '{}' in storage", value)))
}
