//! SeaORM entities for the TeacherMon schema.

pub mod prelude;

pub mod budget_transaction;
pub mod competency_assessment;
pub mod consent;
pub mod development_plan;
pub mod evidence_indicator;
pub mod evidence_portfolio;
pub mod indicator;
pub mod mentoring_visit;
pub mod plc_activity;
pub mod project_budget;
pub mod reflective_journal;
pub mod school;
pub mod sea_orm_active_enums;
pub mod self_assessment;
pub mod sub_indicator;
pub mod teacher;
pub mod user;
