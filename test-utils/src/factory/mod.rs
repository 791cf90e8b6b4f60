//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they depend on so
//! foreign keys always point at real records.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let school = factory::create_school(&db).await?;
//!     let teacher = factory::create_teacher(&db, school.id).await?;
//!     let visit = factory::create_mentoring_visit(&db, teacher.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("pm@example.com")
//!     .role(UserRole::ProjectManager)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `school`, `teacher`, `user` - Core program records
//! - `mentoring_visit`, `competency_assessment`, `self_assessment` - Observation and scoring
//! - `development_plan`, `reflective_journal`, `plc_activity` - Growth records
//! - `evidence` - Portfolio items
//! - `indicator` - Indicator catalog entries with their weighted checks
//! - `consent` - PDPA consent records
//! - `project_budget`, `budget_transaction` - Budget ledger
//! - `helpers` - Id counter and multi-entity shortcuts

pub mod budget_transaction;
pub mod competency_assessment;
pub mod consent;
pub mod development_plan;
pub mod evidence;
pub mod helpers;
pub mod indicator;
pub mod mentoring_visit;
pub mod plc_activity;
pub mod project_budget;
pub mod reflective_journal;
pub mod school;
pub mod self_assessment;
pub mod teacher;
pub mod user;

pub use budget_transaction::create_budget_transaction;
pub use competency_assessment::create_competency_assessment;
pub use consent::create_consent;
pub use development_plan::create_development_plan;
pub use evidence::create_evidence;
pub use indicator::create_indicator;
pub use mentoring_visit::create_mentoring_visit;
pub use plc_activity::create_plc_activity;
pub use project_budget::create_project_budget;
pub use reflective_journal::create_reflective_journal;
pub use school::create_school;
pub use self_assessment::create_self_assessment;
pub use teacher::create_teacher;
pub use user::create_user;
