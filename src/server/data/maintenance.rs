use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::{
    maintenance::{
        CreateTicketParams, MaintenanceTicket, TicketListItem, UpdateTicketStatusParams,
    },
    status::{StatusSet, TicketStatus},
    student::DerivedHostelId,
};

pub struct MaintenanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an open ticket in the hostel the student currently lives in
    pub async fn create(
        &self,
        params: CreateTicketParams,
        hostel_id: DerivedHostelId,
    ) -> Result<MaintenanceTicket, DbErr> {
        let ticket = entity::maintenance_request::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            hostel_id: ActiveValue::Set(hostel_id.get()),
            category: ActiveValue::Set(params.category),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(TicketStatus::Open.as_str().to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        MaintenanceTicket::from_entity(ticket)
    }

    /// Gets all tickets newest first, with student and hostel names
    pub async fn get_all(&self) -> Result<Vec<TicketListItem>, DbErr> {
        let results = entity::prelude::MaintenanceRequest::find()
            .find_also_related(entity::prelude::Student)
            .order_by_desc(entity::maintenance_request::Column::CreatedAt)
            .order_by_desc(entity::maintenance_request::Column::Id)
            .all(self.db)
            .await?;

        // Fetch all referenced hostels in one query
        let hostel_ids: Vec<i32> = results.iter().map(|(t, _)| t.hostel_id).collect();
        let hostels_map: HashMap<i32, entity::hostel::Model> = if !hostel_ids.is_empty() {
            entity::prelude::Hostel::find()
                .filter(entity::hostel::Column::Id.is_in(hostel_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|h| (h.id, h))
                .collect()
        } else {
            HashMap::new()
        };

        results
            .into_iter()
            .map(|(ticket, student)| {
                let student_name = student.map(|s| s.name).unwrap_or_default();
                let hostel_name = hostels_map
                    .get(&ticket.hostel_id)
                    .map(|h| h.name.clone())
                    .unwrap_or_default();

                Ok(TicketListItem {
                    ticket: MaintenanceTicket::from_entity(ticket)?,
                    student_name,
                    hostel_name,
                })
            })
            .collect()
    }

    /// Gets the tickets raised by one student, newest first
    pub async fn get_by_student(&self, student_id: &str) -> Result<Vec<MaintenanceTicket>, DbErr> {
        entity::prelude::MaintenanceRequest::find()
            .filter(entity::maintenance_request::Column::StudentId.eq(student_id))
            .order_by_desc(entity::maintenance_request::Column::CreatedAt)
            .order_by_desc(entity::maintenance_request::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(MaintenanceTicket::from_entity)
            .collect()
    }

    /// Sets a ticket's status
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated, 0 when the ticket does not exist
    /// - `Err(DbErr)` - Database error
    pub async fn update_status(&self, params: UpdateTicketStatusParams) -> Result<u64, DbErr> {
        let result = entity::prelude::MaintenanceRequest::update_many()
            .col_expr(
                entity::maintenance_request::Column::Status,
                Expr::value(params.status.as_str()),
            )
            .filter(entity::maintenance_request::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
