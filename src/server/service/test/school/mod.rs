use crate::server::{error::AppError, model::school::UpdateSchoolParam, service::school::SchoolService};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;
