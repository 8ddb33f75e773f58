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
                    .table(LeaveApplications::Table)
                    .if_not_exists()
                    .col(pk_auto(LeaveApplications::Id))
                    .col(string(LeaveApplications::StudentId))
                    .col(integer(LeaveApplications::HostelId))
                    .col(date(LeaveApplications::FromDate))
                    .col(date(LeaveApplications::ToDate))
                    .col(text(LeaveApplications::Reason))
                    .col(string(LeaveApplications::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(LeaveApplications::AppliedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_applications_student_id")
                            .from(LeaveApplications::Table, LeaveApplications::StudentId)
                            .to(Students::Table, Students::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_applications_hostel_id")
                            .from(LeaveApplications::Table, LeaveApplications::HostelId)
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
            .drop_table(Table::drop().table(LeaveApplications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum LeaveApplications {
    Table,
    Id,
    StudentId,
    HostelId,
    FromDate,
    ToDate,
    Reason,
    Status,
    AppliedAt,
}
