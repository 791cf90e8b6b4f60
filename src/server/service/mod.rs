//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce business
//! rules and ownership checks, coordinate multiple repository calls, and convert
//! repository errors into `AppError`s for the controllers to render.

pub mod assessment;
pub mod auth;
pub mod budget;
pub mod cache;
pub mod completeness;
pub mod consent;
pub mod dashboard;
pub mod evidence;
pub mod health;
pub mod indicator;
pub mod journal;
pub mod mentoring;
pub mod pdpa;
pub mod plc;
pub mod report;
pub mod retention;
pub mod school;
pub mod self_assessment;
pub mod setup_code;
pub mod teacher;
pub mod user;

#[cfg(test)]
mod test;
