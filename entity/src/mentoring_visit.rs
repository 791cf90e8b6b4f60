use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::VisitType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mentoring_visit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub teacher_id: i32,
    pub visit_date: Date,
    pub visit_type: VisitType,
    pub observer: String,
    pub focus_area: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub strengths: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub challenges: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub suggestions: Option<String>,
    pub follow_up_required: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Teacher,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
