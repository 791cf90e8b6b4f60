use crate::server::data::competency_assessment::CompetencyAssessmentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
