use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reflective_journal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub teacher_id: i32,
    /// Journal month formatted as `YYYY-MM`.
    pub month: String,
    #[sea_orm(column_type = "Text")]
    pub reflection_text: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub success_story: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub difficulty: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub support_request: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
