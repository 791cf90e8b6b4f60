use entity::sea_orm_active_enums::UserRole;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::user::UpdateUserParam, service::user::UserService,
};

mod update;
