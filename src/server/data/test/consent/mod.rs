use crate::server::{data::consent::ConsentRepository, model::pdpa::GrantConsentParam};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{ConsentStatus, ConsentType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod expire_stale;
mod upsert_granted;
