use std::path::PathBuf;

use crate::{
    model::evidence::CreateVideoLinkDto,
    server::{
        error::AppError,
        model::{
            evidence::{EvidenceFilter, UploadedFile, VerifyEvidenceParam},
            user::User,
        },
        service::evidence::{resolve_teacher, EvidenceService},
    },
};
use entity::sea_orm_active_enums::{EvidenceType, UserRole};
use test_utils::{builder::TestBuilder, factory};

mod create_video_link;
mod delete;
mod get_by_teacher;
mod resolve_teacher;
mod stats;
mod upload;
mod verify;

/// Fresh upload directory under the system temp dir.
async fn upload_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("teachermon-test-{}", uuid::Uuid::new_v4()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    dir
}
