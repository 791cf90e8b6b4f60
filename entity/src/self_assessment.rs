use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{AssessmentPeriod, CompetencyLevel, SelfAssessmentStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "self_assessment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub teacher_id: i32,
    pub assessment_period: AssessmentPeriod,
    pub pedagogy_score: i32,
    pub classroom_score: i32,
    pub community_score: i32,
    pub professionalism_score: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub pedagogy_reflection: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub classroom_reflection: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub community_reflection: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub professionalism_reflection: Option<String>,
    pub overall_level: CompetencyLevel,
    #[sea_orm(column_type = "Text", nullable)]
    pub strengths: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub areas_for_improvement: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub action_plan: Option<String>,
    pub status: SelfAssessmentStatus,
    pub submitted_at: Option<DateTimeUtc>,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub reviewer_comments: Option<String>,
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
    #[sea_orm(has_many = "super::evidence_portfolio::Entity")]
    EvidencePortfolio,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::evidence_portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvidencePortfolio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
