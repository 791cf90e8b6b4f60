use crate::server::data::reflective_journal::ReflectiveJournalRepository;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod delete_created_before;
mod get_all;
mod month_taken;
