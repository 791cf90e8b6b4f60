//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard`, converts request DTOs into
//! parameter types, calls one service, and converts the result back into a DTO.
//! Every handler carries a `#[utoipa::path]` annotation so the router can register it
//! on the OpenAPI document.

pub mod assessment;
pub mod auth;
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
