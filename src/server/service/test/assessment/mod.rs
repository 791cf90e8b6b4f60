use chrono::NaiveDate;
use entity::sea_orm_active_enums::{AssessmentPeriod, CompetencyLevel};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::assessment::{
        CreateCompetencyAssessmentParam, UpdateCompetencyAssessmentParam,
        UpdateDevelopmentPlanParam,
    },
    service::assessment::AssessmentService,
};

mod competency;
mod update_plan;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
