use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000013_create_project_budget_table::ProjectBudget;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BudgetTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(BudgetTransaction::Id))
                    .col(integer(BudgetTransaction::ProjectBudgetId))
                    .col(date(BudgetTransaction::TransactionDate))
                    .col(big_integer(BudgetTransaction::AmountSatang))
                    .col(string_len(BudgetTransaction::Category, 16))
                    .col(string(BudgetTransaction::Description))
                    .col(string_null(BudgetTransaction::Recipient))
                    .col(string_null(BudgetTransaction::ReceiptNumber))
                    .col(string_null(BudgetTransaction::RelatedActivityType))
                    .col(integer_null(BudgetTransaction::RelatedActivityId))
                    .col(string_len(BudgetTransaction::Status, 16).default("PENDING"))
                    .col(integer(BudgetTransaction::CreatedBy))
                    .col(integer_null(BudgetTransaction::ApprovedBy))
                    .col(timestamp_null(BudgetTransaction::ApprovedAt))
                    .col(text_null(BudgetTransaction::RejectionReason))
                    .col(
                        timestamp(BudgetTransaction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(BudgetTransaction::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_budget_transaction_project_budget_id")
                            .from(BudgetTransaction::Table, BudgetTransaction::ProjectBudgetId)
                            .to(ProjectBudget::Table, ProjectBudget::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_budget_transaction_date")
                    .table(BudgetTransaction::Table)
                    .col(BudgetTransaction::TransactionDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BudgetTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BudgetTransaction {
    Table,
    Id,
    ProjectBudgetId,
    TransactionDate,
    AmountSatang,
    Category,
    Description,
    Recipient,
    ReceiptNumber,
    RelatedActivityType,
    RelatedActivityId,
    Status,
    CreatedBy,
    ApprovedBy,
    ApprovedAt,
    RejectionReason,
    CreatedAt,
    UpdatedAt,
}
