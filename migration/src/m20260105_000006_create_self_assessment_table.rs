use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_teacher_table::Teacher;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SelfAssessment::Table)
                    .if_not_exists()
                    .col(pk_auto(SelfAssessment::Id))
                    .col(integer(SelfAssessment::TeacherId))
                    .col(string_len(SelfAssessment::AssessmentPeriod, 16))
                    .col(integer(SelfAssessment::PedagogyScore))
                    .col(integer(SelfAssessment::ClassroomScore))
                    .col(integer(SelfAssessment::CommunityScore))
                    .col(integer(SelfAssessment::ProfessionalismScore))
                    .col(text_null(SelfAssessment::PedagogyReflection))
                    .col(text_null(SelfAssessment::ClassroomReflection))
                    .col(text_null(SelfAssessment::CommunityReflection))
                    .col(text_null(SelfAssessment::ProfessionalismReflection))
                    .col(string_len(SelfAssessment::OverallLevel, 16))
                    .col(text_null(SelfAssessment::Strengths))
                    .col(text_null(SelfAssessment::AreasForImprovement))
                    .col(text_null(SelfAssessment::ActionPlan))
                    .col(string_len(SelfAssessment::Status, 16).default("DRAFT"))
                    .col(timestamp_null(SelfAssessment::SubmittedAt))
                    .col(integer_null(SelfAssessment::ReviewedBy))
                    .col(timestamp_null(SelfAssessment::ReviewedAt))
                    .col(text_null(SelfAssessment::ReviewerComments))
                    .col(
                        timestamp(SelfAssessment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(SelfAssessment::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_self_assessment_teacher_id")
                            .from(SelfAssessment::Table, SelfAssessment::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SelfAssessment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SelfAssessment {
    Table,
    Id,
    TeacherId,
    AssessmentPeriod,
    PedagogyScore,
    ClassroomScore,
    CommunityScore,
    ProfessionalismScore,
    PedagogyReflection,
    ClassroomReflection,
    CommunityReflection,
    ProfessionalismReflection,
    OverallLevel,
    Strengths,
    AreasForImprovement,
    ActionPlan,
    Status,
    SubmittedAt,
    ReviewedBy,
    ReviewedAt,
    ReviewerComments,
    CreatedAt,
    UpdatedAt,
}
