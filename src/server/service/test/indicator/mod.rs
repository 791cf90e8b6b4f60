use entity::sea_orm_active_enums::IndicatorAspect;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::indicator::IndicatorCodes, service::indicator::IndicatorService,
};

mod ensure_known_codes;
mod get_all;
mod get_sub_indicator;
mod validate;
