use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::user::User, service::completeness::CompletenessService,
};

mod for_caller;
mod for_teacher;

/// Seeds a small catalog: one professional indicator with a manual and an auto check,
/// one personal indicator, and one social indicator scored from round 3.
async fn seed_catalog(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    factory::indicator::IndicatorFactory::new(db, "PRO_1.1")
        .check("COURSE_DESC", 50, false)
        .check("EVIDENCE_LINKED_SESSION", 50, true)
        .build()
        .await?;
    factory::create_indicator(db, "PER_1.1").await?;
    factory::indicator::IndicatorFactory::new(db, "SOC_1")
        .from_round(3)
        .check("MENTOR_LEARNING", 100, true)
        .build()
        .await?;

    Ok(())
}
