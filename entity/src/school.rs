use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Region;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "school")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub school_name: String,
    pub province: String,
    pub region: Region,
    pub school_size: String,
    pub area_type: String,
    pub student_total: i32,
    pub director_name: Option<String>,
    pub quality_school_flag: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub community_context: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teacher::Entity")]
    Teacher,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
