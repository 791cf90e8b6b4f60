//! Teacher service for business logic.
//!
//! Writes check citizen id shape, citizen id and email uniqueness, and the target
//! school before touching the table, so callers get a 400, 409 or 404 naming the
//! problem instead of a bare constraint error.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        competency_assessment::CompetencyAssessmentRepository,
        development_plan::DevelopmentPlanRepository, mentoring_visit::MentoringVisitRepository,
        plc_activity::PlcActivityRepository, reflective_journal::ReflectiveJournalRepository,
        school::SchoolRepository, teacher::TeacherRepository,
    },
    error::AppError,
    model::{
        teacher::{
            CreateTeacherParam, Teacher, TeacherDetail, TeacherFilter, TeacherStatistics,
            TeacherWithSchool, UpdateTeacherParam,
        },
        Page,
    },
    util::parse::{validate_citizen_id, validate_email},
};

/// Number of visits shown on the teacher profile.
const DETAIL_VISIT_LIMIT: u64 = 5;
/// Number of journal months shown on the teacher profile.
const DETAIL_JOURNAL_LIMIT: u64 = 6;
/// Number of PLC sessions shown on the teacher profile.
const DETAIL_PLC_LIMIT: u64 = 10;

pub struct TeacherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: TeacherFilter,
    ) -> Result<Page<TeacherWithSchool>, AppError> {
        let repo = TeacherRepository::new(self.db);

        let (teachers, total) = repo.get_paginated(&filter).await?;

        Ok(Page::new(teachers, total, filter.page, filter.per_page))
    }

    /// Gets a teacher with their school and recent program activity.
    ///
    /// # Returns
    /// - `Ok(TeacherDetail)` - Teacher, school, and the latest activity of each kind
    /// - `Err(AppError::NotFound)` - No teacher with that id
    pub async fn get_detail(&self, id: i32) -> Result<TeacherDetail, AppError> {
        let TeacherWithSchool { teacher, school } = TeacherRepository::new(self.db)
            .find_with_school(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let mentoring_visits = MentoringVisitRepository::new(self.db)
            .get_by_teacher(id, Some(DETAIL_VISIT_LIMIT))
            .await?;
        let competency_assessments = CompetencyAssessmentRepository::new(self.db)
            .get_by_teacher(id)
            .await?;
        let reflective_journals = ReflectiveJournalRepository::new(self.db)
            .get_all(Some(id), Some(DETAIL_JOURNAL_LIMIT))
            .await?;
        let plc_activities = PlcActivityRepository::new(self.db)
            .get_by_teacher(id, Some(DETAIL_PLC_LIMIT))
            .await?;
        let development_plans = DevelopmentPlanRepository::new(self.db)
            .get_all(Some(id))
            .await?;

        Ok(TeacherDetail {
            teacher,
            school,
            mentoring_visits,
            competency_assessments,
            reflective_journals,
            plc_activities,
            development_plans,
        })
    }

    /// Counts a teacher's visits, journals, and PLC sessions and finds their latest
    /// competency assessment.
    pub async fn get_statistics(&self, id: i32) -> Result<TeacherStatistics, AppError> {
        if !TeacherRepository::new(self.db).exists(id).await? {
            return Err(not_found(id));
        }

        Ok(TeacherStatistics {
            visits_count: MentoringVisitRepository::new(self.db)
                .count_by_teacher(id)
                .await?,
            journals_count: ReflectiveJournalRepository::new(self.db)
                .count_by_teacher(id)
                .await?,
            plc_count: PlcActivityRepository::new(self.db)
                .count_by_teacher(id)
                .await?,
            latest_assessment: CompetencyAssessmentRepository::new(self.db)
                .find_latest_by_teacher(id)
                .await?,
        })
    }

    /// Creates a teacher.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The created teacher
    /// - `Err(AppError::BadRequest)` - Malformed citizen id or email
    /// - `Err(AppError::Conflict)` - Citizen id or email already used
    /// - `Err(AppError::NotFound)` - School does not exist
    pub async fn create(&self, param: CreateTeacherParam) -> Result<Teacher, AppError> {
        validate_citizen_id(&param.citizen_id)?;
        if let Some(email) = &param.email {
            validate_email(email)?;
        }

        self.ensure_unique(Some(&param.citizen_id), param.email.as_deref(), None)
            .await?;
        self.ensure_school(param.school_id).await?;

        let teacher = TeacherRepository::new(self.db).create(param).await?;

        tracing::info!("Created teacher {} in school {}", teacher.id, teacher.school_id);

        Ok(teacher)
    }

    /// Applies a partial update with the same checks as `create` for changed fields.
    pub async fn update(&self, param: UpdateTeacherParam) -> Result<Teacher, AppError> {
        let repo = TeacherRepository::new(self.db);
        let id = param.id;

        if !repo.exists(id).await? {
            return Err(not_found(id));
        }

        if let Some(citizen_id) = &param.citizen_id {
            validate_citizen_id(citizen_id)?;
        }
        if let Some(email) = &param.email {
            validate_email(email)?;
        }
        self.ensure_unique(param.citizen_id.as_deref(), param.email.as_deref(), Some(id))
            .await?;
        if let Some(school_id) = param.school_id {
            self.ensure_school(school_id).await?;
        }

        repo.update(param).await?.ok_or_else(|| not_found(id))
    }

    /// Deletes a teacher and, by cascade, their activity records.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TeacherRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted teacher {}", id);

        Ok(())
    }

    async fn ensure_unique(
        &self,
        citizen_id: Option<&str>,
        email: Option<&str>,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        let repo = TeacherRepository::new(self.db);

        if let Some(citizen_id) = citizen_id {
            if repo.citizen_id_taken(citizen_id, exclude_id).await? {
                return Err(AppError::Conflict("Citizen ID already exists".to_string()));
            }
        }
        if let Some(email) = email {
            if repo.email_taken(email, exclude_id).await? {
                return Err(AppError::Conflict("Email already exists".to_string()));
            }
        }

        Ok(())
    }

    async fn ensure_school(&self, school_id: i32) -> Result<(), AppError> {
        if !SchoolRepository::new(self.db).exists(school_id).await? {
            return Err(AppError::NotFound(format!(
                "School with ID {} not found",
                school_id
            )));
        }
        Ok(())
    }
}

pub(crate) fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Teacher with ID {} not found", id))
}

/// Fails with the teacher 404 unless the teacher exists. Shared by the activity services.
pub(crate) async fn ensure_teacher_exists(
    db: &DatabaseConnection,
    teacher_id: i32,
) -> Result<(), AppError> {
    if !TeacherRepository::new(db).exists(teacher_id).await? {
        return Err(not_found(teacher_id));
    }
    Ok(())
}
