use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{BudgetCategory, TransactionStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "budget_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_budget_id: i32,
    pub transaction_date: Date,
    /// Amount in satang (1/100 baht).
    pub amount_satang: i64,
    pub category: BudgetCategory,
    pub description: String,
    pub recipient: Option<String>,
    pub receipt_number: Option<String>,
    pub related_activity_type: Option<String>,
    pub related_activity_id: Option<i32>,
    pub status: TransactionStatus,
    pub created_by: i32,
    pub approved_by: Option<i32>,
    pub approved_at: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub rejection_reason: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project_budget::Entity",
        from = "Column::ProjectBudgetId",
        to = "super::project_budget::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ProjectBudget,
}

impl Related<super::project_budget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectBudget.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
