use sea_orm_migration::{prelude::*, schema::*};

use super::m20251018_000001_create_hostel_table::Hostels;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(string(Students::StudentId).primary_key())
                    .col(string(Students::Name))
                    .col(string(Students::Phone).default(""))
                    .col(string(Students::RoomNumber).default(""))
                    .col(integer(Students::HostelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_hostel_id")
                            .from(Students::Table, Students::HostelId)
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
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Students {
    Table,
    StudentId,
    Name,
    Phone,
    RoomNumber,
    HostelId,
}
