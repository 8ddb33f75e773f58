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
                    .table(Notices::Table)
                    .if_not_exists()
                    .col(pk_auto(Notices::Id))
                    .col(string(Notices::Title))
                    .col(text(Notices::Body))
                    .col(string(Notices::Audience).default("all"))
                    .col(integer_null(Notices::HostelId))
                    .col(
                        timestamp_with_time_zone(Notices::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notices_hostel_id")
                            .from(Notices::Table, Notices::HostelId)
                            .to(Hostels::Table, Hostels::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Notices {
    Table,
    Id,
    Title,
    Body,
    Audience,
    HostelId,
    CreatedAt,
}
