use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{School, Teacher};
///
/// let test = TestBuilder::new()
///     .with_table(School)
///     .with_table(Teacher)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables every teacher record depends on.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - School
    /// - Teacher
    /// - User
    ///
    /// Use this when testing school, teacher, or account functionality. For tests
    /// involving per-teacher activity records, use `with_activity_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_teacher_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_teacher_tables(self) -> Self {
        self.with_table(School)
            .with_table(Teacher)
            .with_table(User)
    }

    /// Adds the teacher tables plus every per-teacher activity table.
    ///
    /// Includes mentoring visits, competency and self assessments, development plans,
    /// reflective journals, PLC activities, evidence portfolio items with their
    /// indicator codes, and the indicator catalog the codes are checked against.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_activity_tables(self) -> Self {
        self.with_teacher_tables()
            .with_table(MentoringVisit)
            .with_table(CompetencyAssessment)
            .with_table(SelfAssessment)
            .with_table(DevelopmentPlan)
            .with_table(ReflectiveJournal)
            .with_table(PlcActivity)
            .with_table(EvidencePortfolio)
            .with_table(EvidenceIndicator)
            .with_indicator_tables()
    }

    /// Adds the indicator catalog tables.
    ///
    /// The catalog starts empty; seed it with `factory::indicator::IndicatorFactory`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_indicator_tables(self) -> Self {
        self.with_table(Indicator).with_table(SubIndicator)
    }

    /// Adds the project budget and budget transaction tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_budget_tables(self) -> Self {
        self.with_table(ProjectBudget).with_table(BudgetTransaction)
    }

    /// Adds every table in the schema.
    ///
    /// Equivalent to `with_activity_tables()` followed by the consent and budget
    /// tables. Used by tests that touch data across modules, such as PDPA exports.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_activity_tables()
            .with_table(Consent)
            .with_budget_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`. Tables are created in the order
    /// they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
