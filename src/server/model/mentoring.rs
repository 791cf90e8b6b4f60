//! Mentoring visit domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::VisitType;

use crate::{
    model::mentoring::{
        CreateMentoringVisitDto, MentoringQueryDto, MentoringVisitDto,
        PaginatedMentoringVisitsDto, UpdateMentoringVisitDto,
    },
    server::{
        model::{teacher::TeacherSummary, Page},
        util::sanitize::{sanitize, sanitize_opt},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct MentoringVisit {
    pub id: i32,
    pub teacher_id: i32,
    pub visit_date: NaiveDate,
    pub visit_type: VisitType,
    pub observer: String,
    pub focus_area: String,
    pub strengths: Option<String>,
    pub challenges: Option<String>,
    pub suggestions: Option<String>,
    pub follow_up_required: bool,
    pub created_at: DateTime<Utc>,
    pub teacher: Option<TeacherSummary>,
}

impl MentoringVisit {
    pub fn from_entity(entity: entity::mentoring_visit::Model) -> Self {
        Self {
            id: entity.id,
            teacher_id: entity.teacher_id,
            visit_date: entity.visit_date,
            visit_type: entity.visit_type,
            observer: entity.observer,
            focus_area: entity.focus_area,
            strengths: entity.strengths,
            challenges: entity.challenges,
            suggestions: entity.suggestions,
            follow_up_required: entity.follow_up_required,
            created_at: entity.created_at,
            teacher: None,
        }
    }

    pub fn from_entity_with_teacher(
        entity: entity::mentoring_visit::Model,
        teacher: Option<entity::teacher::Model>,
    ) -> Self {
        Self {
            teacher: teacher.as_ref().map(TeacherSummary::from_entity),
            ..Self::from_entity(entity)
        }
    }

    pub fn into_dto(self) -> MentoringVisitDto {
        MentoringVisitDto {
            id: self.id,
            teacher_id: self.teacher_id,
            visit_date: self.visit_date,
            visit_type: self.visit_type,
            observer: self.observer,
            focus_area: self.focus_area,
            strengths: self.strengths,
            challenges: self.challenges,
            suggestions: self.suggestions,
            follow_up_required: self.follow_up_required,
            created_at: self.created_at,
            teacher: self.teacher.map(TeacherSummary::into_dto),
        }
    }
}

impl Page<MentoringVisit> {
    pub fn into_dto(self) -> PaginatedMentoringVisitsDto {
        PaginatedMentoringVisitsDto {
            visits: self.items.into_iter().map(MentoringVisit::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MentoringFilter {
    pub teacher_id: Option<i32>,
    pub visit_type: Option<VisitType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: u64,
    pub per_page: u64,
}

impl MentoringFilter {
    pub fn from_dto(dto: MentoringQueryDto) -> Self {
        Self {
            teacher_id: dto.teacher_id,
            visit_type: dto.visit_type,
            start_date: dto.start_date,
            end_date: dto.end_date,
            page: dto.page,
            per_page: dto.entries,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMentoringVisitParam {
    pub teacher_id: i32,
    pub visit_date: NaiveDate,
    pub visit_type: VisitType,
    pub observer: String,
    pub focus_area: String,
    pub strengths: Option<String>,
    pub challenges: Option<String>,
    pub suggestions: Option<String>,
    pub follow_up_required: bool,
}

impl CreateMentoringVisitParam {
    pub fn from_dto(dto: CreateMentoringVisitDto) -> Self {
        Self {
            teacher_id: dto.teacher_id,
            visit_date: dto.visit_date,
            visit_type: dto.visit_type,
            observer: sanitize(&dto.observer),
            focus_area: sanitize(&dto.focus_area),
            strengths: sanitize_opt(dto.strengths),
            challenges: sanitize_opt(dto.challenges),
            suggestions: sanitize_opt(dto.suggestions),
            follow_up_required: dto.follow_up_required,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMentoringVisitParam {
    pub id: i32,
    pub visit_date: Option<NaiveDate>,
    pub visit_type: Option<VisitType>,
    pub observer: Option<String>,
    pub focus_area: Option<String>,
    pub strengths: Option<String>,
    pub challenges: Option<String>,
    pub suggestions: Option<String>,
    pub follow_up_required: Option<bool>,
}

impl UpdateMentoringVisitParam {
    pub fn from_dto(id: i32, dto: UpdateMentoringVisitDto) -> Self {
        Self {
            id,
            visit_date: dto.visit_date,
            visit_type: dto.visit_type,
            observer: dto.observer.as_deref().map(sanitize),
            focus_area: dto.focus_area.as_deref().map(sanitize),
            strengths: sanitize_opt(dto.strengths),
            challenges: sanitize_opt(dto.challenges),
            suggestions: sanitize_opt(dto.suggestions),
            follow_up_required: dto.follow_up_required,
        }
    }
}
