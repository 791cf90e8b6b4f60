use crate::server::{data::mentoring_visit::MentoringVisitRepository, model::mentoring::MentoringFilter};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::VisitType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod get_recent;
