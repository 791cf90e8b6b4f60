use crate::server::{data::plc_activity::PlcActivityRepository, model::plc::PlcFilter};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod count_by_level;
mod get_paginated;
