use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_school_table::School;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teacher::Table)
                    .if_not_exists()
                    .col(pk_auto(Teacher::Id))
                    .col(string_len_uniq(Teacher::CitizenId, 13))
                    .col(string(Teacher::FullName))
                    .col(string_len(Teacher::Gender, 8))
                    .col(date_null(Teacher::BirthDate))
                    .col(integer(Teacher::Cohort))
                    .col(date(Teacher::AppointmentDate))
                    .col(string(Teacher::Position))
                    .col(string_null(Teacher::Major))
                    .col(string_null(Teacher::Email).unique_key())
                    .col(string_null(Teacher::Phone))
                    .col(integer(Teacher::SchoolId))
                    .col(string_len(Teacher::Status, 16).default("ACTIVE"))
                    .col(
                        timestamp(Teacher::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Teacher::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_school_id")
                            .from(Teacher::Table, Teacher::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_school_id")
                    .table(Teacher::Table)
                    .col(Teacher::SchoolId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teacher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Teacher {
    Table,
    Id,
    CitizenId,
    FullName,
    Gender,
    BirthDate,
    Cohort,
    AppointmentDate,
    Position,
    Major,
    Email,
    Phone,
    SchoolId,
    Status,
    CreatedAt,
    UpdatedAt,
}
