//! Notice domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::notice::{CreateNoticeDto, NoticeDto},
    server::{error::AppError, util::validate::present},
};

/// Who a notice is shown to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAudience {
    All,
    Hostel,
}

impl NoticeAudience {
    /// Only the literal `hostel` selects hostel scope; anything else, including a missing
    /// value, means everyone.
    pub fn normalize(value: Option<&str>) -> Self {
        match value {
            Some("hostel") => Self::Hostel,
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Hostel => "hostel",
        }
    }

    fn from_stored(value: &str) -> Result<Self, DbErr> {
        match value {
            "all" => Ok(Self::All),
            "hostel" => Ok(Self::Hostel),
            other => Err(DbErr::Custom(format!(
                "Unknown notice audience '{}' in storage",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub audience: NoticeAudience,
    pub hostel_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    /// # Returns
    /// - `Err(DbErr::Custom)` - Stored audience is neither `all` nor `hostel`
    pub fn from_entity(entity: entity::notice::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            title: entity.title,
            body: entity.body,
            audience: NoticeAudience::from_stored(&entity.audience)?,
            hostel_id: entity.hostel_id,
            created_at: entity.created_at,
        })
    }
}

/// Notice joined with the name of the hostel it is scoped to, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeWithHostel {
    pub notice: Notice,
    pub hostel_name: Option<String>,
}

impl NoticeWithHostel {
    pub fn into_dto(self) -> NoticeDto {
        NoticeDto {
            id: self.notice.id,
            title: self.notice.title,
            body: self.notice.body,
            audience: self.notice.audience.as_str().to_string(),
            hostel_id: self.notice.hostel_id,
            hostel_name: self.hostel_name,
            created_at: self.notice.created_at,
        }
    }
}

/// Parameters for posting a notice.
///
/// `hostel_id` is `Some` only when `audience` is `Hostel`; an `All` notice never carries a
/// hostel regardless of what the request contained.
#[derive(Debug, Clone)]
pub struct CreateNoticeParams {
    pub title: String,
    pub body: String,
    pub audience: NoticeAudience,
    pub hostel_id: Option<i32>,
}

impl CreateNoticeParams {
    /// # Returns
    /// - `Ok(CreateNoticeParams)` - Title and body present, audience normalized
    /// - `Err(AppError::BadRequest)` - Title or body missing or blank
    pub fn from_dto(dto: CreateNoticeDto) -> Result<Self, AppError> {
        let (Some(title), Some(body)) = (present(dto.title), present(dto.body)) else {
            return Err(AppError::BadRequest("title & body required".to_string()));
        };

        let audience = NoticeAudience::normalize(dto.audience.as_deref());
        let hostel_id = match audience {
            NoticeAudience::Hostel => dto.hostel_id,
            NoticeAudience::All => None,
        };

        Ok(Self {
            title,
            body,
            audience,
            hostel_id,
        })
    }
}
