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
                    .table(CompetencyAssessment::Table)
                    .if_not_exists()
                    .col(pk_auto(CompetencyAssessment::Id))
                    .col(integer(CompetencyAssessment::TeacherId))
                    .col(string_len(CompetencyAssessment::AssessmentPeriod, 16))
                    .col(integer(CompetencyAssessment::PedagogyScore))
                    .col(integer(CompetencyAssessment::ClassroomScore))
                    .col(integer(CompetencyAssessment::CommunityScore))
                    .col(integer(CompetencyAssessment::ProfessionalismScore))
                    .col(string_len(CompetencyAssessment::OverallLevel, 16))
                    .col(string(CompetencyAssessment::Assessor))
                    .col(text_null(CompetencyAssessment::Notes))
                    .col(
                        timestamp(CompetencyAssessment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_competency_assessment_teacher_id")
                            .from(CompetencyAssessment::Table, CompetencyAssessment::TeacherId)
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
            .drop_table(Table::drop().table(CompetencyAssessment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CompetencyAssessment {
    Table,
    Id,
    TeacherId,
    AssessmentPeriod,
    PedagogyScore,
    ClassroomScore,
    CommunityScore,
    ProfessionalismScore,
    OverallLevel,
    Assessor,
    Notes,
    CreatedAt,
}
