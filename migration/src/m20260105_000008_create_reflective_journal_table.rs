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
                    .table(ReflectiveJournal::Table)
                    .if_not_exists()
                    .col(pk_auto(ReflectiveJournal::Id))
                    .col(integer(ReflectiveJournal::TeacherId))
                    .col(string_len(ReflectiveJournal::Month, 7))
                    .col(text(ReflectiveJournal::ReflectionText))
                    .col(text_null(ReflectiveJournal::SuccessStory))
                    .col(text_null(ReflectiveJournal::Difficulty))
                    .col(text_null(ReflectiveJournal::SupportRequest))
                    .col(
                        timestamp(ReflectiveJournal::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ReflectiveJournal::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reflective_journal_teacher_id")
                            .from(ReflectiveJournal::Table, ReflectiveJournal::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_reflective_journal_teacher_month_unique")
                            .col(ReflectiveJournal::TeacherId)
                            .col(ReflectiveJournal::Month),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReflectiveJournal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReflectiveJournal {
    Table,
    Id,
    TeacherId,
    Month,
    ReflectionText,
    SuccessStory,
    Difficulty,
    SupportRequest,
    CreatedAt,
    UpdatedAt,
}
