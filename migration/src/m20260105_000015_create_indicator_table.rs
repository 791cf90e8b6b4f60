use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Indicator::Table)
                    .if_not_exists()
                    .col(pk_auto(Indicator::Id))
                    .col(string_len_uniq(Indicator::Code, 32))
                    .col(string(Indicator::Name))
                    .col(string_len(Indicator::Aspect, 16))
                    .col(string_len(Indicator::Section, 32))
                    .col(integer(Indicator::FromRound).default(1))
                    .col(integer(Indicator::SortOrder).default(0))
                    .col(boolean(Indicator::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_indicator_aspect")
                    .table(Indicator::Table)
                    .col(Indicator::Aspect)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Indicator::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Indicator {
    Table,
    Id,
    Code,
    Name,
    Aspect,
    Section,
    FromRound,
    SortOrder,
    IsActive,
}
