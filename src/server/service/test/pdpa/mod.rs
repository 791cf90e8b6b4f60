use crate::{
    model::pdpa::ExportFormat,
    server::{
        data::{teacher::{TeacherRepository, ANONYMIZED_NAME}, user::UserRepository},
        error::AppError,
        model::{
            pdpa::{DataCategory, DeleteMyDataParam},
            user::User,
        },
        service::pdpa::PdpaService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod delete_my_data;
mod export;
mod my_data;
