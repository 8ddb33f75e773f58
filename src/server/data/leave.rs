use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::{
    leave::{CreateLeaveParams, LeaveApplication, LeaveListItem, UpdateLeaveStatusParams},
    status::{LeaveStatus, StatusSet},
    student::DerivedHostelId,
};

pub struct LeaveRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaveRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending leave application in the hostel the student currently lives in
    pub async fn create(
        &self,
        params: CreateLeaveParams,
        hostel_id: DerivedHostelId,
    ) -> Result<LeaveApplication, DbErr> {
        let leave = entity::leave_application::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            hostel_id: ActiveValue::Set(hostel_id.get()),
            from_date: ActiveValue::Set(params.from_date),
            to_date: ActiveValue::Set(params.to_date),
            reason: ActiveValue::Set(params.reason),
            status: ActiveValue::Set(LeaveStatus::Pending.as_str().to_string()),
            applied_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        LeaveApplication::from_entity(leave)
    }

    /// Gets all leave applications newest first, with student and hostel names
    pub async fn get_all(&self) -> Result<Vec<LeaveListItem>, DbErr> {
        let results = entity::prelude::LeaveApplication::find()
            .find_also_related(entity::prelude::Student)
            .order_by_desc(entity::leave_application::Column::AppliedAt)
            .order_by_desc(entity::leave_application::Column::Id)
            .all(self.db)
            .await?;

        let hostel_ids: Vec<i32> = results.iter().map(|(l, _)| l.hostel_id).collect();
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
            .map(|(leave, student)| {
                let student_name = student.map(|s| s.name).unwrap_or_default();
                let hostel_name = hostels_map
                    .get(&leave.hostel_id)
                    .map(|h| h.name.clone())
                    .unwrap_or_default();

                Ok(LeaveListItem {
                    leave: LeaveApplication::from_entity(leave)?,
                    student_name,
                    hostel_name,
                })
            })
            .collect()
    }

    /// Gets the leave applications submitted by one student, newest first
    pub async fn get_by_student(&self, student_id: &str) -> Result<Vec<LeaveApplication>, DbErr> {
        entity::prelude::LeaveApplication::find()
            .filter(entity::leave_application::Column::StudentId.eq(student_id))
            .order_by_desc(entity::leave_application::Column::AppliedAt)
            .order_by_desc(entity::leave_application::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(LeaveApplication::from_entity)
            .collect()
    }

    /// Sets a leave application's status
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated, 0 when the application does not exist
    /// - `Err(DbErr)` - Database error
    pub async fn update_status(&self, params: UpdateLeaveStatusParams) -> Result<u64, DbErr> {
        let result = entity::prelude::LeaveApplication::update_many()
            .col_expr(
                entity::leave_application::Column::Status,
                Expr::value(params.status.as_str()),
            )
            .filter(entity::leave_application::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
