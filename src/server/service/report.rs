//! Assistant-teacher assessment report.
//!
//! Teachers are filtered and ordered in SQL. Per-teacher counts, latest records and
//! activity dates come from one grouped query per record type over the whole
//! teacher set, never one query per teacher.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        competency_assessment::CompetencyAssessmentRepository,
        development_plan::DevelopmentPlanRepository, mentoring_visit::MentoringVisitRepository,
        plc_activity::PlcActivityRepository, reflective_journal::ReflectiveJournalRepository,
        teacher::TeacherRepository,
    },
    error::AppError,
    model::{
        report::{TeacherAssessmentRow, TeacherReportFilter},
        ActivityTally,
    },
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds one row per matching assistant teacher, ordered by province then name.
    pub async fn teacher_assessment(
        &self,
        filter: TeacherReportFilter,
    ) -> Result<Vec<TeacherAssessmentRow>, AppError> {
        let teachers = TeacherRepository::new(self.db)
            .find_for_report(&filter)
            .await?;
        if teachers.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i32> = teachers.iter().map(|t| t.teacher.id).collect();

        let assessment_repo = CompetencyAssessmentRepository::new(self.db);
        let visit_repo = MentoringVisitRepository::new(self.db);
        let assessments = assessment_repo.activity_by_teacher(Some(&ids)).await?;
        let visits = visit_repo.activity_by_teacher(Some(&ids)).await?;
        let journals = ReflectiveJournalRepository::new(self.db)
            .activity_by_teacher(Some(&ids))
            .await?;
        let plc = PlcActivityRepository::new(self.db)
            .activity_by_teacher(Some(&ids))
            .await?;
        let plans = DevelopmentPlanRepository::new(self.db)
            .activity_by_teacher(Some(&ids))
            .await?;
        let mut latest_assessments = assessment_repo.latest_by_teachers(&ids).await?;
        let mut latest_visits = visit_repo.latest_by_teachers(&ids).await?;

        let tally = |tallies: &HashMap<i32, ActivityTally>, id: i32| {
            tallies.get(&id).copied().unwrap_or_default()
        };

        Ok(teachers
            .into_iter()
            .map(|teacher| {
                let id = teacher.teacher.id;
                let activity = [
                    tally(&assessments, id),
                    tally(&visits, id),
                    tally(&journals, id),
                    tally(&plc, id),
                    tally(&plans, id),
                ];

                TeacherAssessmentRow {
                    teacher,
                    assessment_count: activity[0].count,
                    latest_assessment: latest_assessments.remove(&id),
                    mentoring_count: activity[1].count,
                    latest_mentoring: latest_visits.remove(&id),
                    journal_count: activity[2].count,
                    plc_count: activity[3].count,
                    plan_count: activity[4].count,
                    last_activity_date: activity.iter().filter_map(|a| a.last_date).max(),
                }
            })
            .collect())
    }
}
