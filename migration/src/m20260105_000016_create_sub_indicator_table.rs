use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000015_create_indicator_table::Indicator;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubIndicator::Table)
                    .if_not_exists()
                    .col(pk_auto(SubIndicator::Id))
                    .col(string_len(SubIndicator::IndicatorCode, 32))
                    .col(string_len_uniq(SubIndicator::Code, 32))
                    .col(string(SubIndicator::Name))
                    .col(integer(SubIndicator::Weight))
                    .col(boolean(SubIndicator::AutoDetect).default(false))
                    .col(integer(SubIndicator::SortOrder).default(0))
                    .col(boolean(SubIndicator::IsActive).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_indicator_indicator_code")
                            .from(SubIndicator::Table, SubIndicator::IndicatorCode)
                            .to(Indicator::Table, Indicator::Code)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sub_indicator_indicator_code")
                    .table(SubIndicator::Table)
                    .col(SubIndicator::IndicatorCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubIndicator::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubIndicator {
    Table,
    Id,
    IndicatorCode,
    Code,
    Name,
    Weight,
    AutoDetect,
    SortOrder,
    IsActive,
}
