//! TeacherMon Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the TeacherMon
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for program records.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_teacher_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_teacher_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (school, teacher) = factory::helpers::create_teacher_with_school(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
