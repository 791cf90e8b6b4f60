//! Evidence portfolio factory.
//!
//! Builds either an uploaded FILE item or a VIDEO_LINK item. Indicator codes are
//! inserted alongside the item when given.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{EvidenceItemType, EvidenceType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test evidence items.
pub struct EvidenceFactory<'a> {
    db: &'a DatabaseConnection,
    teacher_id: i32,
    uploaded_by: i32,
    item_type: EvidenceItemType,
    evidence_type: EvidenceType,
    stored_filename: Option<String>,
    video_url: Option<String>,
    self_assessment_id: Option<i32>,
    indicator_codes: Vec<String>,
}

impl<'a> EvidenceFactory<'a> {
    /// Creates a factory for a FILE item of type LESSON_PLAN with a unique stored name.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `teacher_id` - Teacher the evidence belongs to
    /// - `uploaded_by` - Id of the uploading account
    pub fn new(db: &'a DatabaseConnection, teacher_id: i32, uploaded_by: i32) -> Self {
        Self {
            db,
            teacher_id,
            uploaded_by,
            item_type: EvidenceItemType::File,
            evidence_type: EvidenceType::LessonPlan,
            stored_filename: Some(format!("evidence-{}.pdf", next_id())),
            video_url: None,
            self_assessment_id: None,
            indicator_codes: Vec::new(),
        }
    }

    /// Turns the item into a VIDEO_LINK pointing at `url`.
    pub fn video_link(mut self, url: impl Into<String>) -> Self {
        self.item_type = EvidenceItemType::VideoLink;
        self.stored_filename = None;
        self.video_url = Some(url.into());
        self
    }

    pub fn evidence_type(mut self, evidence_type: EvidenceType) -> Self {
        self.evidence_type = evidence_type;
        self
    }

    pub fn self_assessment_id(mut self, id: Option<i32>) -> Self {
        self.self_assessment_id = id;
        self
    }

    pub fn indicator_codes(mut self, codes: &[&str]) -> Self {
        self.indicator_codes = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Builds and inserts the evidence item and its indicator codes.
    pub async fn build(self) -> Result<entity::evidence_portfolio::Model, DbErr> {
        let is_file = self.item_type == EvidenceItemType::File;
        let evidence = entity::evidence_portfolio::ActiveModel {
            teacher_id: ActiveValue::Set(self.teacher_id),
            item_type: ActiveValue::Set(self.item_type),
            evidence_type: ActiveValue::Set(self.evidence_type),
            original_filename: ActiveValue::Set(is_file.then(|| "lesson.pdf".to_string())),
            stored_filename: ActiveValue::Set(self.stored_filename),
            file_size: ActiveValue::Set(is_file.then_some(1024)),
            mime_type: ActiveValue::Set(is_file.then(|| "application/pdf".to_string())),
            video_url: ActiveValue::Set(self.video_url),
            video_title: ActiveValue::Set(None),
            video_description: ActiveValue::Set(None),
            video_platform: ActiveValue::Set((!is_file).then(|| "YOUTUBE".to_string())),
            uploaded_by: ActiveValue::Set(self.uploaded_by),
            is_verified: ActiveValue::Set(false),
            verified_by: ActiveValue::Set(None),
            verified_at: ActiveValue::Set(None),
            self_assessment_id: ActiveValue::Set(self.self_assessment_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for code in self.indicator_codes {
            entity::evidence_indicator::ActiveModel {
                evidence_id: ActiveValue::Set(evidence.id),
                indicator_code: ActiveValue::Set(code),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(evidence)
    }
}

/// Creates a FILE evidence item with default values.
pub async fn create_evidence(
    db: &DatabaseConnection,
    teacher_id: i32,
    uploaded_by: i32,
) -> Result<entity::evidence_portfolio::Model, DbErr> {
    EvidenceFactory::new(db, teacher_id, uploaded_by).build().await
}
