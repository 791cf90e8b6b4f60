use crate::server::{
    error::AppError,
    model::mentoring::{CreateMentoringVisitParam, UpdateMentoringVisitParam},
    service::mentoring::MentoringService,
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::VisitType;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn visit_for(teacher_id: i32) -> CreateMentoringVisitParam {
    CreateMentoringVisitParam {
        teacher_id,
        visit_date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
        visit_type: VisitType::Coaching,
        observer: "Mentor A".to_string(),
        focus_area: "Questioning".to_string(),
        strengths: None,
        challenges: None,
        suggestions: None,
        follow_up_required: false,
    }
}
