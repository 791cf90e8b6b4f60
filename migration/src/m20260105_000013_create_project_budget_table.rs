use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectBudget::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectBudget::Id))
                    .col(integer(ProjectBudget::FiscalYear))
                    .col(string(ProjectBudget::Name))
                    .col(big_integer(ProjectBudget::TotalAllocatedSatang).default(0))
                    .col(string_null(ProjectBudget::FundingSource))
                    .col(text_null(ProjectBudget::Description))
                    .col(boolean(ProjectBudget::IsActive).default(true))
                    .col(integer(ProjectBudget::CreatedBy))
                    .col(
                        timestamp(ProjectBudget::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ProjectBudget::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectBudget::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectBudget {
    Table,
    Id,
    FiscalYear,
    Name,
    TotalAllocatedSatang,
    FundingSource,
    Description,
    IsActive,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
