use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hostels::Table)
                    .if_not_exists()
                    .col(pk_auto(Hostels::Id))
                    .col(string_uniq(Hostels::Name).extra("COLLATE NOCASE"))
                    .col(string_null(Hostels::Address))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hostels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Hostels {
    Table,
    Id,
    Name,
    Address,
}
