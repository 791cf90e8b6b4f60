pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_school_table;
mod m20260105_000002_create_teacher_table;
mod m20260105_000003_create_user_table;
mod m20260105_000004_create_mentoring_visit_table;
mod m20260105_000005_create_competency_assessment_table;
mod m20260105_000006_create_self_assessment_table;
mod m20260105_000007_create_development_plan_table;
mod m20260105_000008_create_reflective_journal_table;
mod m20260105_000009_create_plc_activity_table;
mod m20260105_000010_create_evidence_portfolio_table;
mod m20260105_000011_create_evidence_indicator_table;
mod m20260105_000012_create_consent_table;
mod m20260105_000013_create_project_budget_table;
mod m20260105_000014_create_budget_transaction_table;
mod m20260105_000015_create_indicator_table;
mod m20260105_000016_create_sub_indicator_table;
mod m20260105_000017_seed_indicator_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_school_table::Migration),
            Box::new(m20260105_000002_create_teacher_table::Migration),
            Box::new(m20260105_000003_create_user_table::Migration),
            Box::new(m20260105_000004_create_mentoring_visit_table::Migration),
            Box::new(m20260105_000005_create_competency_assessment_table::Migration),
            Box::new(m20260105_000006_create_self_assessment_table::Migration),
            Box::new(m20260105_000007_create_development_plan_table::Migration),
            Box::new(m20260105_000008_create_reflective_journal_table::Migration),
            Box::new(m20260105_000009_create_plc_activity_table::Migration),
            Box::new(m20260105_000010_create_evidence_portfolio_table::Migration),
            Box::new(m20260105_000011_create_evidence_indicator_table::Migration),
            Box::new(m20260105_000012_create_consent_table::Migration),
            Box::new(m20260105_000013_create_project_budget_table::Migration),
            Box::new(m20260105_000014_create_budget_transaction_table::Migration),
            Box::new(m20260105_000015_create_indicator_table::Migration),
            Box::new(m20260105_000016_create_sub_indicator_table::Migration),
            Box::new(m20260105_000017_seed_indicator_catalog::Migration),
        ]
    }
}
