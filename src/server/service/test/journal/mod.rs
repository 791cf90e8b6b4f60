use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::journal::{CreateJournalDto, UpdateJournalDto},
    server::{
        error::AppError,
        model::journal::{CreateJournalParam, UpdateJournalParam},
        service::journal::JournalService,
    },
};

mod create;
mod update;

fn create_dto(teacher_id: i32, month: &str) -> CreateJournalDto {
    CreateJournalDto {
        teacher_id,
        month: month.to_string(),
        reflection_text: "Tried group work in <i>grade 4</i> math".to_string(),
        success_story: None,
        difficulty: None,
        support_request: None,
    }
}
