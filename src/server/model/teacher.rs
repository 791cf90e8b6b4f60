//! Teacher domain models and parameters.
//!
//! A teacher belongs to exactly one school. Listing rows carry the school so the
//! API can show it without a second request; the detail view additionally bundles
//! the teacher's most recent program activity.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{Gender, Region, TeacherStatus};

use crate::{
    model::teacher::{
        CreateTeacherDto, PaginatedTeachersDto, TeacherDetailDto, TeacherDto, TeacherListItemDto,
        TeacherQueryDto, TeacherStatisticsDto, TeacherSummaryDto, UpdateTeacherDto,
    },
    server::{
        model::{
            assessment::{CompetencyAssessment, DevelopmentPlan},
            journal::Journal,
            mentoring::MentoringVisit,
            plc::PlcActivity,
            school::School,
            Page,
        },
        util::sanitize::{non_empty, sanitize, sanitize_opt},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub id: i32,
    /// 13-digit national id, unique across teachers.
    pub citizen_id: String,
    pub full_name: String,
    pub gender: Gender,
    pub birth_date: Option<NaiveDate>,
    /// Program intake the teacher joined with.
    pub cohort: i32,
    pub appointment_date: NaiveDate,
    pub position: String,
    pub major: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub school_id: i32,
    pub status: TeacherStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Teacher {
    pub fn from_entity(entity: entity::teacher::Model) -> Self {
        Self {
            id: entity.id,
            citizen_id: entity.citizen_id,
            full_name: entity.full_name,
            gender: entity.gender,
            birth_date: entity.birth_date,
            cohort: entity.cohort,
            appointment_date: entity.appointment_date,
            position: entity.position,
            major: entity.major,
            email: entity.email,
            phone: entity.phone,
            school_id: entity.school_id,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TeacherDto {
        TeacherDto {
            id: self.id,
            citizen_id: self.citizen_id,
            full_name: self.full_name,
            gender: self.gender,
            birth_date: self.birth_date,
            cohort: self.cohort,
            appointment_date: self.appointment_date,
            position: self.position,
            major: self.major,
            email: self.email,
            phone: self.phone,
            school_id: self.school_id,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_summary_dto(self) -> TeacherSummaryDto {
        TeacherSummaryDto {
            id: self.id,
            full_name: self.full_name,
            school_id: self.school_id,
        }
    }
}

/// Short teacher reference attached to activity rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherSummary {
    pub id: i32,
    pub full_name: String,
    pub school_id: i32,
}

impl TeacherSummary {
    pub fn from_entity(entity: &entity::teacher::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name.clone(),
            school_id: entity.school_id,
        }
    }

    pub fn into_dto(self) -> TeacherSummaryDto {
        TeacherSummaryDto {
            id: self.id,
            full_name: self.full_name,
            school_id: self.school_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeacherWithSchool {
    pub teacher: Teacher,
    pub school: School,
}

impl Page<TeacherWithSchool> {
    pub fn into_dto(self) -> PaginatedTeachersDto {
        PaginatedTeachersDto {
            teachers: self
                .items
                .into_iter()
                .map(|row| TeacherListItemDto {
                    teacher: row.teacher.into_dto(),
                    school: row.school.into_summary_dto(),
                })
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Teacher with the school and recent activity shown on the profile page.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherDetail {
    pub teacher: Teacher,
    pub school: School,
    pub mentoring_visits: Vec<MentoringVisit>,
    pub competency_assessments: Vec<CompetencyAssessment>,
    pub reflective_journals: Vec<Journal>,
    pub plc_activities: Vec<PlcActivity>,
    pub development_plans: Vec<DevelopmentPlan>,
}

impl TeacherDetail {
    pub fn into_dto(self) -> TeacherDetailDto {
        TeacherDetailDto {
            teacher: self.teacher.into_dto(),
            school: self.school.into_dto(),
            mentoring_visits: self
                .mentoring_visits
                .into_iter()
                .map(MentoringVisit::into_dto)
                .collect(),
            competency_assessments: self
                .competency_assessments
                .into_iter()
                .map(CompetencyAssessment::into_dto)
                .collect(),
            reflective_journals: self
                .reflective_journals
                .into_iter()
                .map(Journal::into_dto)
                .collect(),
            plc_activities: self
                .plc_activities
                .into_iter()
                .map(PlcActivity::into_dto)
                .collect(),
            development_plans: self
                .development_plans
                .into_iter()
                .map(DevelopmentPlan::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeacherStatistics {
    pub visits_count: u64,
    pub journals_count: u64,
    pub plc_count: u64,
    pub latest_assessment: Option<CompetencyAssessment>,
}

impl TeacherStatistics {
    pub fn into_dto(self) -> TeacherStatisticsDto {
        TeacherStatisticsDto {
            visits_count: self.visits_count,
            journals_count: self.journals_count,
            plc_count: self.plc_count,
            latest_assessment: self.latest_assessment.map(CompetencyAssessment::into_dto),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeacherFilter {
    pub search: Option<String>,
    pub region: Option<Region>,
    pub province: Option<String>,
    pub school_id: Option<i32>,
    pub status: Option<TeacherStatus>,
    pub cohort: Option<i32>,
    pub page: u64,
    pub per_page: u64,
}

impl TeacherFilter {
    pub fn from_dto(dto: TeacherQueryDto) -> Self {
        Self {
            search: non_empty(dto.search),
            region: dto.region,
            province: non_empty(dto.province),
            school_id: dto.school_id,
            status: dto.status,
            cohort: dto.cohort,
            page: dto.page,
            per_page: dto.entries,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeacherParam {
    pub citizen_id: String,
    pub full_name: String,
    pub gender: Gender,
    pub birth_date: Option<NaiveDate>,
    pub cohort: i32,
    pub appointment_date: NaiveDate,
    pub position: String,
    pub major: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub school_id: i32,
    pub status: TeacherStatus,
}

impl CreateTeacherParam {
    pub fn from_dto(dto: CreateTeacherDto) -> Self {
        Self {
            citizen_id: dto.citizen_id.trim().to_string(),
            full_name: sanitize(&dto.full_name),
            gender: dto.gender,
            birth_date: dto.birth_date,
            cohort: dto.cohort,
            appointment_date: dto.appointment_date,
            position: sanitize(&dto.position),
            major: sanitize_opt(dto.major),
            email: non_empty(dto.email).map(|e| e.to_lowercase()),
            phone: sanitize_opt(dto.phone),
            school_id: dto.school_id,
            status: dto.status.unwrap_or(TeacherStatus::Active),
        }
    }
}

/// Partial update of a teacher; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeacherParam {
    pub id: i32,
    pub citizen_id: Option<String>,
    pub full_name: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub cohort: Option<i32>,
    pub appointment_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub major: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub school_id: Option<i32>,
    pub status: Option<TeacherStatus>,
}

impl UpdateTeacherParam {
    pub fn from_dto(id: i32, dto: UpdateTeacherDto) -> Self {
        Self {
            id,
            citizen_id: dto.citizen_id.map(|c| c.trim().to_string()),
            full_name: dto.full_name.as_deref().map(sanitize),
            gender: dto.gender,
            birth_date: dto.birth_date,
            cohort: dto.cohort,
            appointment_date: dto.appointment_date,
            position: dto.position.as_deref().map(sanitize),
            major: sanitize_opt(dto.major),
            email: non_empty(dto.email).map(|e| e.to_lowercase()),
            phone: sanitize_opt(dto.phone),
            school_id: dto.school_id,
            status: dto.status,
        }
    }
}
