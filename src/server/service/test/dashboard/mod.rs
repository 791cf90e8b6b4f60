use std::time::Duration;

use crate::server::{
    error::AppError,
    service::{cache::TtlCache, dashboard::DashboardService},
};
use entity::sea_orm_active_enums::{Region, TeacherStatus};
use test_utils::{builder::TestBuilder, factory};

mod stats;
mod teachers;

fn cache() -> TtlCache<serde_json::Value> {
    TtlCache::new(Duration::from_secs(60), 8)
}
