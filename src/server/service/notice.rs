use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hostel::HostelRepository, notice::NoticeRepository},
    error::AppError,
    model::notice::{CreateNoticeParams, Notice, NoticeWithHostel},
};

pub struct NoticeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoticeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a notice
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Hostel-scoped notice names a hostel that does not exist
    pub async fn create(&self, params: CreateNoticeParams) -> Result<Notice, AppError> {
        if let Some(hostel_id) = params.hostel_id {
            if !HostelRepository::new(self.db).exists(hostel_id).await? {
                return Err(AppError::NotFound("Hostel not found".to_string()));
            }
        }

        let notice = NoticeRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Posted notice {} for audience '{}'",
            notice.id,
            notice.audience.as_str()
        );

        Ok(notice)
    }

    /// Gets the notices visible to a hostel, or every notice when no hostel is given
    pub async fn get_visible(
        &self,
        hostel_id: Option<i32>,
    ) -> Result<Vec<NoticeWithHostel>, AppError> {
        Ok(NoticeRepository::new(self.db).get_visible(hostel_id).await?)
    }
}
