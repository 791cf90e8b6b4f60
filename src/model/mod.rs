//! JSON request and response DTOs exposed by the REST API.

pub mod api;
pub mod assessment;
pub mod budget;
pub mod completeness;
pub mod dashboard;
pub mod evidence;
pub mod health;
pub mod indicator;
pub mod journal;
pub mod mentoring;
pub mod pdpa;
pub mod plc;
pub mod report;
pub mod school;
pub mod self_assessment;
pub mod teacher;
pub mod user;
