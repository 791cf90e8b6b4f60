//! Indicator catalog factory.
//!
//! Inserts one indicator together with its weighted checks. Tests seed only the
//! indicators they score against.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::IndicatorAspect;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a catalog indicator and its sub-indicators.
///
/// # Example
///
/// ```rust,ignore
/// let indicator = IndicatorFactory::new(&db, "PRO_1.1")
///     .check("COURSE_DESC", 50, false)
///     .check("EVIDENCE_LINKED_SESSION", 50, true)
///     .build()
///     .await?;
/// ```
pub struct IndicatorFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    aspect: IndicatorAspect,
    section: String,
    from_round: i32,
    is_active: bool,
    checks: Vec<(String, i32, bool)>,
}

impl<'a> IndicatorFactory<'a> {
    /// Creates a factory for an active indicator scored from round 1.
    ///
    /// The aspect is PERSONAL for `PER_` codes, SOCIAL for `SOC_` codes and
    /// PROFESSIONAL otherwise. The section defaults to `"GENERAL"`.
    pub fn new(db: &'a DatabaseConnection, code: impl Into<String>) -> Self {
        let code = code.into();
        let aspect = if code.starts_with("PER_") {
            IndicatorAspect::Personal
        } else if code.starts_with("SOC_") {
            IndicatorAspect::Social
        } else {
            IndicatorAspect::Professional
        };

        Self {
            db,
            code,
            aspect,
            section: "GENERAL".to_string(),
            from_round: 1,
            is_active: true,
            checks: Vec::new(),
        }
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn from_round(mut self, round: i32) -> Self {
        self.from_round = round;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Adds a weighted check in insertion order.
    pub fn check(mut self, code: impl Into<String>, weight: i32, auto_detect: bool) -> Self {
        self.checks.push((code.into(), weight, auto_detect));
        self
    }

    /// Builds and inserts the indicator and its checks.
    ///
    /// # Returns
    /// - `Ok(entity::indicator::Model)` - Created indicator
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::indicator::Model, DbErr> {
        let indicator = entity::indicator::ActiveModel {
            code: ActiveValue::Set(self.code.clone()),
            name: ActiveValue::Set(format!("Indicator {}", self.code)),
            aspect: ActiveValue::Set(self.aspect),
            section: ActiveValue::Set(self.section),
            from_round: ActiveValue::Set(self.from_round),
            sort_order: ActiveValue::Set(next_id() as i32),
            is_active: ActiveValue::Set(self.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (order, (code, weight, auto_detect)) in (1i32..).zip(self.checks) {
            entity::sub_indicator::ActiveModel {
                indicator_code: ActiveValue::Set(indicator.code.clone()),
                name: ActiveValue::Set(format!("Check {}", code)),
                code: ActiveValue::Set(code),
                weight: ActiveValue::Set(weight),
                auto_detect: ActiveValue::Set(auto_detect),
                sort_order: ActiveValue::Set(order),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(indicator)
    }
}

/// Creates an indicator with a single manual check `<code>_DOC` weighted 100.
pub async fn create_indicator(
    db: &DatabaseConnection,
    code: &str,
) -> Result<entity::indicator::Model, DbErr> {
    IndicatorFactory::new(db, code)
        .check(format!("{}_DOC", code), 100, false)
        .build()
        .await
}
