use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evidence_indicator")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub evidence_id: i32,
    pub indicator_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evidence_portfolio::Entity",
        from = "Column::EvidenceId",
        to = "super::evidence_portfolio::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    EvidencePortfolio,
}

impl Related<super::evidence_portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvidencePortfolio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
