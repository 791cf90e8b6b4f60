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
                    .table(MentoringVisit::Table)
                    .if_not_exists()
                    .col(pk_auto(MentoringVisit::Id))
                    .col(integer(MentoringVisit::TeacherId))
                    .col(date(MentoringVisit::VisitDate))
                    .col(string_len(MentoringVisit::VisitType, 16))
                    .col(string(MentoringVisit::Observer))
                    .col(string(MentoringVisit::FocusArea))
                    .col(text_null(MentoringVisit::Strengths))
                    .col(text_null(MentoringVisit::Challenges))
                    .col(text_null(MentoringVisit::Suggestions))
                    .col(boolean(MentoringVisit::FollowUpRequired).default(false))
                    .col(
                        timestamp(MentoringVisit::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentoring_visit_teacher_id")
                            .from(MentoringVisit::Table, MentoringVisit::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mentoring_visit_teacher_date")
                    .table(MentoringVisit::Table)
                    .col(MentoringVisit::TeacherId)
                    .col(MentoringVisit::VisitDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MentoringVisit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MentoringVisit {
    Table,
    Id,
    TeacherId,
    VisitDate,
    VisitType,
    Observer,
    FocusArea,
    Strengths,
    Challenges,
    Suggestions,
    FollowUpRequired,
    CreatedAt,
}
