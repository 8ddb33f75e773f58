use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251018_000001_create_hostel_table::Hostels,
    m20251018_000002_create_student_table::Students,
};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceRequests::Id))
                    .col(string(MaintenanceRequests::StudentId))
                    .col(integer(MaintenanceRequests::HostelId))
                    .col(string(MaintenanceRequests::Category))
                    .col(text(MaintenanceRequests::Description))
                    .col(string(MaintenanceRequests::Status).default("open"))
                    .col(
                        timestamp_with_time_zone(MaintenanceRequests::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_requests_student_id")
                            .from(MaintenanceRequests::Table, MaintenanceRequests::StudentId)
                            .to(Students::Table, Students::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_requests_hostel_id")
                            .from(MaintenanceRequests::Table, MaintenanceRequests::HostelId)
                            .to(Hostels::Table, Hostels::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaintenanceRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum MaintenanceRequests {
    Table,
    Id,
    StudentId,
    HostelId,
    Category,
    Description,
    Status,
    CreatedAt,
}
