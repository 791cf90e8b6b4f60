use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000010_create_evidence_portfolio_table::EvidencePortfolio;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EvidenceIndicator::Table)
                    .if_not_exists()
                    .col(pk_auto(EvidenceIndicator::Id))
                    .col(integer(EvidenceIndicator::EvidenceId))
                    .col(string_len(EvidenceIndicator::IndicatorCode, 32))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evidence_indicator_evidence_id")
                            .from(EvidenceIndicator::Table, EvidenceIndicator::EvidenceId)
                            .to(EvidencePortfolio::Table, EvidencePortfolio::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_evidence_indicator_unique")
                            .col(EvidenceIndicator::EvidenceId)
                            .col(EvidenceIndicator::IndicatorCode),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EvidenceIndicator::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EvidenceIndicator {
    Table,
    Id,
    EvidenceId,
    IndicatorCode,
}
