//! Notice factory for creating test notice entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notices.
///
/// Defaults to an `all` audience notice. Calling `for_hostel` scopes it to one hostel.
pub struct NoticeFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    body: String,
    hostel_id: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> NoticeFactory<'a> {
    /// Creates a new NoticeFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Notice {id}"`
    /// - body: `"Body of notice {id}"`
    /// - audience: `all`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Notice {}", id),
            body: format!("Body of notice {}", id),
            hostel_id: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the notice title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Scopes the notice to a single hostel (audience `hostel`).
    pub fn for_hostel(mut self, hostel_id: i32) -> Self {
        self.hostel_id = Some(hostel_id);
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the notice entity into the database.
    pub async fn build(self) -> Result<entity::notice::Model, DbErr> {
        let audience = if self.hostel_id.is_some() { "hostel" } else { "all" };

        entity::notice::ActiveModel {
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            audience: ActiveValue::Set(audience.to_string()),
            hostel_id: ActiveValue::Set(self.hostel_id),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `all` audience notice with default values.
pub async fn create_notice(db: &DatabaseConnection) -> Result<entity::notice::Model, DbErr> {
    NoticeFactory::new(db).build().await
}
