pub use super::budget_transaction::Entity as BudgetTransaction;
pub use super::competency_assessment::Entity as CompetencyAssessment;
pub use super::consent::Entity as Consent;
pub use super::development_plan::Entity as DevelopmentPlan;
pub use super::evidence_indicator::Entity as EvidenceIndicator;
pub use super::evidence_portfolio::Entity as EvidencePortfolio;
pub use super::indicator::Entity as Indicator;
pub use super::mentoring_visit::Entity as MentoringVisit;
pub use super::plc_activity::Entity as PlcActivity;
pub use super::project_budget::Entity as ProjectBudget;
pub use super::reflective_journal::Entity as ReflectiveJournal;
pub use super::school::Entity as School;
pub use super::self_assessment::Entity as SelfAssessment;
pub use super::sub_indicator::Entity as SubIndicator;
pub use super::teacher::Entity as Teacher;
pub use super::user::Entity as User;
