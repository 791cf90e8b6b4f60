mod budget_transaction;
mod competency_assessment;
mod consent;
mod evidence;
mod mentoring_visit;
mod plc_activity;
mod project_budget;
mod reflective_journal;
mod school;
mod teacher;
mod user;
