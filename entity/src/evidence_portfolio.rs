use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{EvidenceItemType, EvidenceType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evidence_portfolio")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub teacher_id: i32,
    pub item_type: EvidenceItemType,
    pub evidence_type: EvidenceType,
    pub original_filename: Option<String>,
    pub stored_filename: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub video_url: Option<String>,
    pub video_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub video_description: Option<String>,
    pub video_platform: Option<String>,
    pub uploaded_by: i32,
    pub is_verified: bool,
    pub verified_by: Option<i32>,
    pub verified_at: Option<DateTimeUtc>,
    pub self_assessment_id: Option<i32>,
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
    #[sea_orm(
        belongs_to = "super::self_assessment::Entity",
        from = "Column::SelfAssessmentId",
        to = "super::self_assessment::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    SelfAssessment,
    #[sea_orm(has_many = "super::evidence_indicator::Entity")]
    EvidenceIndicator,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::self_assessment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SelfAssessment.def()
    }
}

impl Related<super::evidence_indicator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvidenceIndicator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
