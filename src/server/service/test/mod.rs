mod assessment;
mod auth;
mod completeness;
mod consent;
mod dashboard;
mod evidence;
mod indicator;
mod journal;
mod mentoring;
mod pdpa;
mod plc;
mod report;
mod retention;
mod school;
mod self_assessment;
mod teacher;
mod user;
