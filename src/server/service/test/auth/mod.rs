use crate::{
    model::user::{LoginDto, RegisterDto, SetupDto},
    server::{
        error::{auth::AuthError, AppError},
        service::{auth::AuthService, setup_code::SetupCodeService},
        util::password::hash_password,
    },
};
use entity::sea_orm_active_enums::UserRole;
use test_utils::{builder::TestBuilder, factory};

mod login;
mod register;
mod setup;
