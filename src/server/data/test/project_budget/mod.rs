use crate::server::data::project_budget::ProjectBudgetRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod allocations;
mod get_all;
