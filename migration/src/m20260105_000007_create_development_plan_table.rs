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
                    .table(DevelopmentPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(DevelopmentPlan::Id))
                    .col(integer(DevelopmentPlan::TeacherId))
                    .col(string(DevelopmentPlan::FocusCompetency))
                    .col(text(DevelopmentPlan::ActionPlan))
                    .col(string(DevelopmentPlan::SupportType))
                    .col(date(DevelopmentPlan::StartDate))
                    .col(date(DevelopmentPlan::EndDate))
                    .col(string(DevelopmentPlan::ProgressStatus))
                    .col(text_null(DevelopmentPlan::ProgressNotes))
                    .col(
                        timestamp(DevelopmentPlan::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(DevelopmentPlan::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_development_plan_teacher_id")
                            .from(DevelopmentPlan::Table, DevelopmentPlan::TeacherId)
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
            .drop_table(Table::drop().table(DevelopmentPlan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DevelopmentPlan {
    Table,
    Id,
    TeacherId,
    FocusCompetency,
    ActionPlan,
    SupportType,
    StartDate,
    EndDate,
    ProgressStatus,
    ProgressNotes,
    CreatedAt,
    UpdatedAt,
}
