use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NoticeDto {
    pub id: i32,
    pub title: String,
    pub body: String,
    /// `all` or `hostel`
    pub audience: String,
    pub hostel_id: Option<i32>,
    pub hostel_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNoticeDto {
    pub title: Option<String>,
    pub body: Option<String>,
    pub audience: Option<String>,
    pub hostel_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NoticeListDto {
    pub notices: Vec<NoticeDto>,
}
