use crate::server::{
    data::school::SchoolRepository,
    model::school::{SchoolFilter, UpdateSchoolParam},
};
use entity::sea_orm_active_enums::Region;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;
