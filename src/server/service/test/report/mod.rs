use crate::server::{
    error::AppError,
    model::report::TeacherReportFilter,
    service::report::ReportService,
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::Region;
use test_utils::{builder::TestBuilder, factory};

mod teacher_assessment;
