use crate::server::{
    error::AppError,
    model::pdpa::GrantConsentParam,
    service::consent::ConsentService,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{ConsentStatus, ConsentType};
use test_utils::{builder::TestBuilder, factory};

mod grant;
mod has_consent;
mod revoke;
