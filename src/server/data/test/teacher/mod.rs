use crate::server::{
    data::teacher::{TeacherRepository, ANONYMIZED_NAME},
    model::teacher::{CreateTeacherParam, TeacherFilter},
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::{Gender, Region, TeacherStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod citizen_id_taken;
mod create;
mod get_paginated;
mod scrub_personal_info;
