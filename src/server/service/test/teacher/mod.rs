use chrono::NaiveDate;
use entity::sea_orm_active_enums::Gender;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::teacher::CreateTeacherDto,
    server::{
        error::AppError,
        model::teacher::CreateTeacherParam,
        service::teacher::TeacherService,
    },
};

mod create;
mod get_statistics;

fn create_dto(school_id: i32, citizen_id: &str) -> CreateTeacherDto {
    CreateTeacherDto {
        citizen_id: citizen_id.to_string(),
        full_name: "Somchai <b>Jaidee</b>".to_string(),
        gender: Gender::Male,
        birth_date: None,
        cohort: 2,
        appointment_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        position: "ครูผู้ช่วย".to_string(),
        major: None,
        email: None,
        phone: None,
        school_id,
        status: None,
    }
}
