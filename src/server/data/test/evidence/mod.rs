use crate::server::{
    data::evidence::EvidenceRepository,
    model::evidence::{CreateEvidenceParam, EvidenceFilter, StoredFile, VerifyEvidenceParam},
};
use entity::sea_orm_active_enums::{EvidenceItemType, EvidenceType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_teacher;
mod link_to_self_assessment;
mod verify;
