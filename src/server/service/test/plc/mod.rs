use crate::server::{
    error::AppError,
    model::plc::{CreatePlcActivityParam, UpdatePlcActivityParam},
    service::plc::PlcService,
};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;

fn activity_for(teacher_id: i32) -> CreatePlcActivityParam {
    CreatePlcActivityParam {
        teacher_id,
        plc_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        plc_level: "SCHOOL".to_string(),
        topic: "Active learning".to_string(),
        role: "Member".to_string(),
        takeaway: None,
    }
}
