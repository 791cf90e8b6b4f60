use sea_orm::entity::prelude::*;

/// One weighted evidence check of an indicator.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sub_indicator")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub indicator_code: String,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    /// Share of the indicator score, the weights of one indicator sum to 100.
    pub weight: i32,
    /// Satisfied from program records rather than tagged evidence.
    pub auto_detect: bool,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::indicator::Entity",
        from = "Column::IndicatorCode",
        to = "super::indicator::Column::Code",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Indicator,
}

impl Related<super::indicator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Indicator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
