use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(School::Table)
                    .if_not_exists()
                    .col(pk_auto(School::Id))
                    .col(string(School::SchoolName))
                    .col(string(School::Province))
                    .col(string_len(School::Region, 16))
                    .col(string(School::SchoolSize))
                    .col(string(School::AreaType))
                    .col(integer(School::StudentTotal).default(0))
                    .col(string_null(School::DirectorName))
                    .col(boolean(School::QualitySchoolFlag).default(false))
                    .col(text_null(School::CommunityContext))
                    .col(
                        timestamp(School::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(School::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_school_province")
                    .table(School::Table)
                    .col(School::Province)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(School::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum School {
    Table,
    Id,
    SchoolName,
    Province,
    Region,
    SchoolSize,
    AreaType,
    StudentTotal,
    DirectorName,
    QualitySchoolFlag,
    CommunityContext,
    CreatedAt,
    UpdatedAt,
}
