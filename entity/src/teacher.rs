use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{Gender, TeacherStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub citizen_id: String,
    pub full_name: String,
    pub gender: Gender,
    pub birth_date: Option<Date>,
    pub cohort: i32,
    pub appointment_date: Date,
    pub position: String,
    pub major: Option<String>,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub school_id: i32,
    pub status: TeacherStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::school::Entity",
        from = "Column::SchoolId",
        to = "super::school::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    School,
    #[sea_orm(has_many = "super::mentoring_visit::Entity")]
    MentoringVisit,
    #[sea_orm(has_many = "super::competency_assessment::Entity")]
    CompetencyAssessment,
    #[sea_orm(has_many = "super::self_assessment::Entity")]
    SelfAssessment,
    #[sea_orm(has_many = "super::development_plan::Entity")]
    DevelopmentPlan,
    #[sea_orm(has_many = "super::reflective_journal::Entity")]
    ReflectiveJournal,
    #[sea_orm(has_many = "super::plc_activity::Entity")]
    PlcActivity,
    #[sea_orm(has_many = "super::evidence_portfolio::Entity")]
    EvidencePortfolio,
}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::mentoring_visit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MentoringVisit.def()
    }
}

impl Related<super::competency_assessment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompetencyAssessment.def()
    }
}

impl Related<super::self_assessment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SelfAssessment.def()
    }
}

impl Related<super::development_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DevelopmentPlan.def()
    }
}

impl Related<super::reflective_journal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReflectiveJournal.def()
    }
}

impl Related<super::plc_activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlcActivity.def()
    }
}

impl Related<super::evidence_portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvidencePortfolio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
