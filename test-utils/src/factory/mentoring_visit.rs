//! Mentoring visit factory.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::VisitType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test mentoring visits.
pub struct MentoringVisitFactory<'a> {
    db: &'a DatabaseConnection,
    teacher_id: i32,
    visit_date: NaiveDate,
    visit_type: VisitType,
    observer: String,
    focus_area: String,
    follow_up_required: bool,
}

impl<'a> MentoringVisitFactory<'a> {
    /// Creates a factory for a COACHING visit on 2025-01-15 observed by `"Mentor A"`.
    pub fn new(db: &'a DatabaseConnection, teacher_id: i32) -> Self {
        Self {
            db,
            teacher_id,
            visit_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default(),
            visit_type: VisitType::Coaching,
            observer: "Mentor A".to_string(),
            focus_area: "Active learning".to_string(),
            follow_up_required: false,
        }
    }

    pub fn visit_date(mut self, visit_date: NaiveDate) -> Self {
        self.visit_date = visit_date;
        self
    }

    pub fn visit_type(mut self, visit_type: VisitType) -> Self {
        self.visit_type = visit_type;
        self
    }

    pub fn follow_up_required(mut self, follow_up_required: bool) -> Self {
        self.follow_up_required = follow_up_required;
        self
    }

    /// Builds and inserts the visit.
    pub async fn build(self) -> Result<entity::mentoring_visit::Model, DbErr> {
        entity::mentoring_visit::ActiveModel {
            teacher_id: ActiveValue::Set(self.teacher_id),
            visit_date: ActiveValue::Set(self.visit_date),
            visit_type: ActiveValue::Set(self.visit_type),
            observer: ActiveValue::Set(self.observer),
            focus_area: ActiveValue::Set(self.focus_area),
            strengths: ActiveValue::Set(None),
            challenges: ActiveValue::Set(None),
            suggestions: ActiveValue::Set(None),
            follow_up_required: ActiveValue::Set(self.follow_up_required),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visit with default values for the given teacher.
pub async fn create_mentoring_visit(
    db: &DatabaseConnection,
    teacher_id: i32,
) -> Result<entity::mentoring_visit::Model, DbErr> {
    MentoringVisitFactory::new(db, teacher_id).build().await
}
