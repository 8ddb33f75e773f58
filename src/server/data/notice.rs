use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notice::{
    CreateNoticeParams, Notice, NoticeAudience, NoticeWithHostel,
};

pub struct NoticeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoticeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new notice stamped with the current time
    pub async fn create(&self, params: CreateNoticeParams) -> Result<Notice, DbErr> {
        let notice = entity::notice::ActiveModel {
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            audience: ActiveValue::Set(params.audience.as_str().to_string()),
            hostel_id: ActiveValue::Set(params.hostel_id),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Notice::from_entity(notice)
    }

    /// Gets notices newest first, with the name of the hostel each is scoped to
    ///
    /// With `hostel_id`, only notices for everyone and hostel notices for that hostel are
    /// returned. Without it, every notice is returned.
    pub async fn get_visible(&self, hostel_id: Option<i32>) -> Result<Vec<NoticeWithHostel>, DbErr> {
        let mut query = entity::prelude::Notice::find();

        if let Some(hostel_id) = hostel_id {
            query = query.filter(
                Condition::any()
                    .add(entity::notice::Column::Audience.eq(NoticeAudience::All.as_str()))
                    .add(
                        Condition::all()
                            .add(
                                entity::notice::Column::Audience
                                    .eq(NoticeAudience::Hostel.as_str()),
                            )
                            .add(entity::notice::Column::HostelId.eq(hostel_id)),
                    ),
            );
        }

        let results = query
            .find_also_related(entity::prelude::Hostel)
            .order_by_desc(entity::notice::Column::CreatedAt)
            .order_by_desc(entity::notice::Column::Id)
            .all(self.db)
            .await?;

        results
            .into_iter()
            .map(|(notice, hostel)| {
                Ok(NoticeWithHostel {
                    notice: Notice::from_entity(notice)?,
                    hostel_name: hostel.map(|h| h.name),
                })
            })
            .collect()
    }
}
