use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "project_budget")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fiscal_year: i32,
    pub name: String,
    /// Allocated amount in satang (1/100 baht).
    pub total_allocated_satang: i64,
    pub funding_source: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_by: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::budget_transaction::Entity")]
    BudgetTransaction,
}

impl Related<super::budget_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
