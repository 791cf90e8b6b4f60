//! Teacher assessment report rows.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{Region, TeacherStatus};

use crate::{
    model::report::{
        LatestAssessmentDto, LatestVisitDto, TeacherAssessmentQueryDto, TeacherAssessmentRowDto,
    },
    server::{
        model::{
            assessment::CompetencyAssessment, mentoring::MentoringVisit,
            teacher::TeacherWithSchool,
        },
        util::sanitize::non_empty,
    },
};

/// Position title of teachers covered by the assessment report.
pub const ASSISTANT_TEACHER_POSITION: &str = "ครูผู้ช่วย";

#[derive(Debug, Clone, Default)]
pub struct TeacherReportFilter {
    pub school_id: Option<i32>,
    pub province: Option<String>,
    pub region: Option<Region>,
    pub cohort: Option<i32>,
    pub status: Option<TeacherStatus>,
}

impl TeacherReportFilter {
    pub fn from_dto(dto: TeacherAssessmentQueryDto) -> Self {
        Self {
            school_id: dto.school_id,
            province: non_empty(dto.province),
            region: dto.region,
            cohort: dto.cohort,
            status: dto.status,
        }
    }
}

/// One teacher's assessment progress and activity counts.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherAssessmentRow {
    pub teacher: TeacherWithSchool,
    pub assessment_count: u64,
    pub latest_assessment: Option<CompetencyAssessment>,
    pub mentoring_count: u64,
    pub latest_mentoring: Option<MentoringVisit>,
    pub journal_count: u64,
    pub plc_count: u64,
    pub plan_count: u64,
    pub last_activity_date: Option<NaiveDate>,
}

impl TeacherAssessmentRow {
    pub fn into_dto(self) -> TeacherAssessmentRowDto {
        let average_score = self
            .latest_assessment
            .as_ref()
            .map(CompetencyAssessment::average_score);
        let TeacherWithSchool { teacher, school } = self.teacher;

        TeacherAssessmentRowDto {
            teacher_id: teacher.id,
            full_name: teacher.full_name,
            position: teacher.position,
            cohort: teacher.cohort,
            school: school.into_summary_dto(),
            assessment_count: self.assessment_count,
            latest_assessment: self.latest_assessment.map(|a| LatestAssessmentDto {
                assessment_period: a.assessment_period,
                overall_level: a.overall_level,
                pedagogy_score: a.pedagogy_score,
                classroom_score: a.classroom_score,
                community_score: a.community_score,
                professionalism_score: a.professionalism_score,
                assessed_at: a.created_at,
                assessor: a.assessor,
            }),
            average_score,
            mentoring_count: self.mentoring_count,
            latest_mentoring: self.latest_mentoring.map(|v| LatestVisitDto {
                visit_date: v.visit_date,
                visit_type: v.visit_type,
                observer: v.observer,
            }),
            journal_count: self.journal_count,
            plc_count: self.plc_count,
            plan_count: self.plan_count,
            status: teacher.status,
            last_activity_date: self.last_activity_date,
        }
    }
}
