use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::IndicatorAspect;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "indicator")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub aspect: IndicatorAspect,
    pub section: String,
    /// First assessment round (1-4) the indicator is scored in.
    pub from_round: i32,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sub_indicator::Entity")]
    SubIndicator,
}

impl Related<super::sub_indicator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubIndicator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
