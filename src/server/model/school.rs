//! School domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::Region;

use crate::{
    model::school::{
        CreateSchoolDto, PaginatedSchoolsDto, SchoolDetailDto, SchoolDto, SchoolListItemDto,
        SchoolQueryDto, SchoolSummaryDto, UpdateSchoolDto,
    },
    server::{
        model::{teacher::Teacher, Page},
        util::sanitize::{non_empty, sanitize, sanitize_opt},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct School {
    pub id: i32,
    pub school_name: String,
    pub province: String,
    pub region: Region,
    pub school_size: String,
    pub area_type: String,
    pub student_total: i32,
    pub director_name: Option<String>,
    /// Whether the school is part of the quality-school program.
    pub quality_school_flag: bool,
    pub community_context: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl School {
    pub fn from_entity(entity: entity::school::Model) -> Self {
        Self {
            id: entity.id,
            school_name: entity.school_name,
            province: entity.province,
            region: entity.region,
            school_size: entity.school_size,
            area_type: entity.area_type,
            student_total: entity.student_total,
            director_name: entity.director_name,
            quality_school_flag: entity.quality_school_flag,
            community_context: entity.community_context,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SchoolDto {
        SchoolDto {
            id: self.id,
            school_name: self.school_name,
            province: self.province,
            region: self.region,
            school_size: self.school_size,
            area_type: self.area_type,
            student_total: self.student_total,
            director_name: self.director_name,
            quality_school_flag: self.quality_school_flag,
            community_context: self.community_context,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_summary_dto(self) -> SchoolSummaryDto {
        SchoolSummaryDto {
            id: self.id,
            school_name: self.school_name,
            province: self.province,
            region: self.region,
        }
    }
}

/// School list row with the number of teachers assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolWithTeacherCount {
    pub school: School,
    pub teacher_count: u64,
}

impl Page<SchoolWithTeacherCount> {
    pub fn into_dto(self) -> PaginatedSchoolsDto {
        PaginatedSchoolsDto {
            schools: self
                .items
                .into_iter()
                .map(|row| SchoolListItemDto {
                    school: row.school.into_dto(),
                    teacher_count: row.teacher_count,
                })
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// School with its teachers ordered by name.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolDetail {
    pub school: School,
    pub teachers: Vec<Teacher>,
}

impl SchoolDetail {
    pub fn into_dto(self) -> SchoolDetailDto {
        SchoolDetailDto {
            school: self.school.into_dto(),
            teachers: self.teachers.into_iter().map(Teacher::into_dto).collect(),
        }
    }
}

/// Filters for the school listing. Empty strings are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct SchoolFilter {
    pub search: Option<String>,
    pub region: Option<Region>,
    pub province: Option<String>,
    pub school_size: Option<String>,
    pub area_type: Option<String>,
    pub page: u64,
    pub per_page: u64,
}

impl SchoolFilter {
    pub fn from_dto(dto: SchoolQueryDto) -> Self {
        Self {
            search: non_empty(dto.search),
            region: dto.region,
            province: non_empty(dto.province),
            school_size: non_empty(dto.school_size),
            area_type: non_empty(dto.area_type),
            page: dto.page,
            per_page: dto.entries,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSchoolParam {
    pub school_name: String,
    pub province: String,
    pub region: Region,
    pub school_size: String,
    pub area_type: String,
    pub student_total: i32,
    pub director_name: Option<String>,
    pub quality_school_flag: bool,
    pub community_context: Option<String>,
}

impl CreateSchoolParam {
    pub fn from_dto(dto: CreateSchoolDto) -> Self {
        Self {
            school_name: sanitize(&dto.school_name),
            province: sanitize(&dto.province),
            region: dto.region,
            school_size: sanitize(&dto.school_size),
            area_type: sanitize(&dto.area_type),
            student_total: dto.student_total,
            director_name: sanitize_opt(dto.director_name),
            quality_school_flag: dto.quality_school_flag,
            community_context: sanitize_opt(dto.community_context),
        }
    }
}

/// Partial update of a school; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateSchoolParam {
    pub id: i32,
    pub school_name: Option<String>,
    pub province: Option<String>,
    pub region: Option<Region>,
    pub school_size: Option<String>,
    pub area_type: Option<String>,
    pub student_total: Option<i32>,
    pub director_name: Option<String>,
    pub quality_school_flag: Option<bool>,
    pub community_context: Option<String>,
}

impl UpdateSchoolParam {
    pub fn from_dto(id: i32, dto: UpdateSchoolDto) -> Self {
        Self {
            id,
            school_name: dto.school_name.as_deref().map(sanitize),
            province: dto.province.as_deref().map(sanitize),
            region: dto.region,
            school_size: dto.school_size.as_deref().map(sanitize),
            area_type: dto.area_type.as_deref().map(sanitize),
            student_total: dto.student_total,
            director_name: sanitize_opt(dto.director_name),
            quality_school_flag: dto.quality_school_flag,
            community_context: sanitize_opt(dto.community_context),
        }
    }
}
