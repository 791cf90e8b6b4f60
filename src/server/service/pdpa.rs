//! PDPA data-subject requests: access, export and erasure of the caller's data.

use std::path::Path;

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::pdpa::{ExportDto, ExportFormat},
    server::{
        data::{
            competency_assessment::CompetencyAssessmentRepository, consent::ConsentRepository,
            development_plan::DevelopmentPlanRepository, evidence::EvidenceRepository,
            mentoring_visit::MentoringVisitRepository, plc_activity::PlcActivityRepository,
            reflective_journal::ReflectiveJournalRepository,
            self_assessment::SelfAssessmentRepository, teacher::TeacherRepository,
            user::UserRepository,
        },
        error::{internal::InternalError, AppError},
        model::{
            evidence::{Evidence, EvidenceFilter},
            pdpa::{DataCategory, DeleteMyDataParam, DeleteMyDataResult, MyData},
            self_assessment::{SelfAssessment, SelfAssessmentFilter},
            user::User,
        },
        service::evidence::remove_stored_files,
        util::csv::to_key_value_csv,
    },
};

pub struct PdpaService<'a> {
    db: &'a DatabaseConnection,
    upload_dir: &'a Path,
}

impl<'a> PdpaService<'a> {
    pub fn new(db: &'a DatabaseConnection, upload_dir: &'a Path) -> Self {
        Self { db, upload_dir }
    }

    /// Collects the account, its teacher record and every activity of that teacher.
    pub async fn my_data(&self, user: User) -> Result<MyData, AppError> {
        let consent_repo = ConsentRepository::new(self.db);
        consent_repo.expire_stale(Some(user.id)).await?;
        let consents = consent_repo.get_by_user(user.id).await?;

        let mut data = MyData {
            user,
            teacher: None,
            mentoring_visits: Vec::new(),
            competency_assessments: Vec::new(),
            self_assessments: Vec::new(),
            reflective_journals: Vec::new(),
            plc_activities: Vec::new(),
            development_plans: Vec::new(),
            evidence: Vec::new(),
            consents,
            exported_at: Utc::now(),
        };

        let Some(teacher_id) = data.user.teacher_id else {
            return Ok(data);
        };

        data.teacher = TeacherRepository::new(self.db)
            .find_with_school(teacher_id)
            .await?;
        data.mentoring_visits = MentoringVisitRepository::new(self.db)
            .get_by_teacher(teacher_id, None)
            .await?;
        data.competency_assessments = CompetencyAssessmentRepository::new(self.db)
            .get_by_teacher(teacher_id)
            .await?;
        data.reflective_journals = ReflectiveJournalRepository::new(self.db)
            .get_all(Some(teacher_id), None)
            .await?;
        data.plc_activities = PlcActivityRepository::new(self.db)
            .get_by_teacher(teacher_id, None)
            .await?;
        data.development_plans = DevelopmentPlanRepository::new(self.db)
            .get_all(Some(teacher_id))
            .await?;
        data.evidence = EvidenceRepository::new(self.db)
            .get_by_teacher(teacher_id, &EvidenceFilter::default())
            .await?;

        let filter = SelfAssessmentFilter {
            teacher_id: Some(teacher_id),
            ..Default::default()
        };
        let assessments = SelfAssessmentRepository::new(self.db)
            .get_all(&filter)
            .await?;
        data.self_assessments = assessments
            .into_iter()
            .map(|model| {
                let items: Vec<Evidence> = data
                    .evidence
                    .iter()
                    .filter(|e| e.self_assessment_id == Some(model.id))
                    .cloned()
                    .collect();
                SelfAssessment::from_entity(model, items)
            })
            .collect();

        Ok(data)
    }

    /// Renders the personal data export in the requested format.
    pub async fn export(&self, user: User, format: ExportFormat) -> Result<ExportDto, AppError> {
        let data = self.my_data(user).await?.into_dto();
        let exported_at = data.exported_at;

        match format {
            ExportFormat::Json => Ok(ExportDto {
                format,
                data: Some(data),
                content: None,
                exported_at,
            }),
            ExportFormat::Csv => {
                let value = serde_json::to_value(&data).map_err(InternalError::Serialization)?;

                Ok(ExportDto {
                    format,
                    data: None,
                    content: Some(to_key_value_csv(&value)),
                    exported_at,
                })
            }
        }
    }

    /// Carries out an erasure request for the caller.
    pub async fn delete_my_data(
        &self,
        user: &User,
        param: DeleteMyDataParam,
    ) -> Result<DeleteMyDataResult, AppError> {
        match param {
            DeleteMyDataParam::Anonymize { categories } => {
                self.anonymize(user, categories.as_deref()).await
            }
            DeleteMyDataParam::DeleteAll => self.delete_all(user).await,
            DeleteMyDataParam::Categories(categories) => {
                self.delete_categories(user, categories).await
            }
        }
    }

    async fn anonymize(
        &self,
        user: &User,
        categories: Option<&[DataCategory]>,
    ) -> Result<DeleteMyDataResult, AppError> {
        let id_prefix: String = user.id.to_string().chars().take(8).collect();
        let scrub_teacher =
            categories.is_none_or(|c| c.contains(&DataCategory::PersonalInfo));

        let txn = self.db.begin().await?;
        UserRepository::new(&txn)
            .anonymize(user.id, format!("anonymized-{}@deleted.local", id_prefix))
            .await?;
        if let (true, Some(teacher_id)) = (scrub_teacher, user.teacher_id) {
            TeacherRepository::new(&txn)
                .scrub_personal_info(teacher_id)
                .await?;
        }
        txn.commit().await?;

        tracing::info!("User {} anonymized on request", user.id);

        Ok(DeleteMyDataResult {
            anonymized: true,
            ..Default::default()
        })
    }

    async fn delete_all(&self, user: &User) -> Result<DeleteMyDataResult, AppError> {
        let txn = self.db.begin().await?;
        let mut stored_files = Vec::new();
        if let Some(teacher_id) = user.teacher_id {
            stored_files = EvidenceRepository::new(&txn)
                .delete_by_teacher(teacher_id)
                .await?;
            TeacherRepository::new(&txn).delete(teacher_id).await?;
        }
        UserRepository::new(&txn).delete(user.id).await?;
        txn.commit().await?;

        // Files go only once the rows they back are gone for good
        remove_stored_files(self.upload_dir, &stored_files).await;

        tracing::info!("User {} deleted all personal data", user.id);

        Ok(DeleteMyDataResult {
            deleted_all: true,
            ..Default::default()
        })
    }

    async fn delete_categories(
        &self,
        user: &User,
        categories: Vec<DataCategory>,
    ) -> Result<DeleteMyDataResult, AppError> {
        if let Some(teacher_id) = user.teacher_id {
            let txn = self.db.begin().await?;
            let mut stored_files = Vec::new();
            for category in &categories {
                stored_files.extend(delete_category(&txn, teacher_id, *category).await?);
            }
            txn.commit().await?;

            remove_stored_files(self.upload_dir, &stored_files).await;
        }

        tracing::info!(
            "User {} deleted data categories: {}",
            user.id,
            categories
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(DeleteMyDataResult {
            deleted_categories: categories,
            ..Default::default()
        })
    }
}

/// Erases one category of a teacher's records, returning any stored file names
/// that must be removed from disk after the transaction commits.
async fn delete_category<C: ConnectionTrait>(
    db: &C,
    teacher_id: i32,
    category: DataCategory,
) -> Result<Vec<String>, AppError> {
    match category {
        DataCategory::PersonalInfo => {
            TeacherRepository::new(db)
                .scrub_personal_info(teacher_id)
                .await?;
        }
        DataCategory::Assessments => {
            CompetencyAssessmentRepository::new(db)
                .delete_by_teacher(teacher_id)
                .await?;
            // Linked evidence keeps its row; the foreign key nulls the link.
            SelfAssessmentRepository::new(db)
                .delete_by_teacher(teacher_id)
                .await?;
        }
        DataCategory::Journals => {
            ReflectiveJournalRepository::new(db)
                .delete_by_teacher(teacher_id)
                .await?;
        }
        DataCategory::Evidence => {
            return Ok(EvidenceRepository::new(db)
                .delete_by_teacher(teacher_id)
                .await?);
        }
        DataCategory::Mentoring => {
            MentoringVisitRepository::new(db)
                .delete_by_teacher(teacher_id)
                .await?;
        }
        DataCategory::Plc => {
            PlcActivityRepository::new(db)
                .delete_by_teacher(teacher_id)
                .await?;
        }
        DataCategory::DevelopmentPlans => {
            DevelopmentPlanRepository::new(db)
                .delete_by_teacher(teacher_id)
                .await?;
        }
    }

    Ok(Vec::new())
}
