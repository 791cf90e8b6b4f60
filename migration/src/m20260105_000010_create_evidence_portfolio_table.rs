use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_teacher_table::Teacher,
    m20260105_000006_create_self_assessment_table::SelfAssessment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EvidencePortfolio::Table)
                    .if_not_exists()
                    .col(pk_auto(EvidencePortfolio::Id))
                    .col(integer(EvidencePortfolio::TeacherId))
                    .col(string_len(EvidencePortfolio::ItemType, 16))
                    .col(string_len(EvidencePortfolio::EvidenceType, 32))
                    .col(string_null(EvidencePortfolio::OriginalFilename))
                    .col(string_null(EvidencePortfolio::StoredFilename))
                    .col(big_integer_null(EvidencePortfolio::FileSize))
                    .col(string_null(EvidencePortfolio::MimeType))
                    .col(string_null(EvidencePortfolio::VideoUrl))
                    .col(string_null(EvidencePortfolio::VideoTitle))
                    .col(text_null(EvidencePortfolio::VideoDescription))
                    .col(string_null(EvidencePortfolio::VideoPlatform))
                    .col(integer(EvidencePortfolio::UploadedBy))
                    .col(boolean(EvidencePortfolio::IsVerified).default(false))
                    .col(integer_null(EvidencePortfolio::VerifiedBy))
                    .col(timestamp_null(EvidencePortfolio::VerifiedAt))
                    .col(integer_null(EvidencePortfolio::SelfAssessmentId))
                    .col(
                        timestamp(EvidencePortfolio::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evidence_portfolio_teacher_id")
                            .from(EvidencePortfolio::Table, EvidencePortfolio::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evidence_portfolio_self_assessment_id")
                            .from(EvidencePortfolio::Table, EvidencePortfolio::SelfAssessmentId)
                            .to(SelfAssessment::Table, SelfAssessment::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EvidencePortfolio::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EvidencePortfolio {
    Table,
    Id,
    TeacherId,
    ItemType,
    EvidenceType,
    OriginalFilename,
    StoredFilename,
    FileSize,
    MimeType,
    VideoUrl,
    VideoTitle,
    VideoDescription,
    VideoPlatform,
    UploadedBy,
    IsVerified,
    VerifiedBy,
    VerifiedAt,
    SelfAssessmentId,
    CreatedAt,
}
