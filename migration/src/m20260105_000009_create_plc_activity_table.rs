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
                    .table(PlcActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(PlcActivity::Id))
                    .col(integer(PlcActivity::TeacherId))
                    .col(date(PlcActivity::PlcDate))
                    .col(string(PlcActivity::PlcLevel))
                    .col(string(PlcActivity::Topic))
                    .col(string(PlcActivity::Role))
                    .col(text_null(PlcActivity::Takeaway))
                    .col(
                        timestamp(PlcActivity::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plc_activity_teacher_id")
                            .from(PlcActivity::Table, PlcActivity::TeacherId)
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
            .drop_table(Table::drop().table(PlcActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlcActivity {
    Table,
    Id,
    TeacherId,
    PlcDate,
    PlcLevel,
    Topic,
    Role,
    Takeaway,
    CreatedAt,
}
