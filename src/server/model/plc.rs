//! Professional Learning Community activity domain models.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::plc::{
        CreatePlcActivityDto, PaginatedPlcActivitiesDto, PlcActivityDto, PlcGroupCountDto,
        PlcQueryDto, UpdatePlcActivityDto,
    },
    server::{
        model::Page,
        util::sanitize::{non_empty, sanitize, sanitize_opt},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct PlcActivity {
    pub id: i32,
    pub teacher_id: i32,
    pub plc_date: NaiveDate,
    pub plc_level: String,
    pub topic: String,
    pub role: String,
    pub takeaway: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PlcActivity {
    pub fn from_entity(entity: entity::plc_activity::Model) -> Self {
        Self {
            id: entity.id,
            teacher_id: entity.teacher_id,
            plc_date: entity.plc_date,
            plc_level: entity.plc_level,
            topic: entity.topic,
            role: entity.role,
            takeaway: entity.takeaway,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PlcActivityDto {
        PlcActivityDto {
            id: self.id,
            teacher_id: self.teacher_id,
            plc_date: self.plc_date,
            plc_level: self.plc_level,
            topic: self.topic,
            role: self.role,
            takeaway: self.takeaway,
            created_at: self.created_at,
        }
    }
}

impl Page<PlcActivity> {
    pub fn into_dto(self) -> PaginatedPlcActivitiesDto {
        PaginatedPlcActivitiesDto {
            activities: self.items.into_iter().map(PlcActivity::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Number of activities at one PLC level.
#[derive(Debug, Clone, PartialEq)]
pub struct PlcGroupCount {
    pub plc_level: String,
    pub count: u64,
}

impl PlcGroupCount {
    pub fn into_dto(self) -> PlcGroupCountDto {
        PlcGroupCountDto {
            plc_level: self.plc_level,
            count: self.count,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlcFilter {
    pub teacher_id: Option<i32>,
    pub plc_level: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: u64,
    pub per_page: u64,
}

impl PlcFilter {
    pub fn from_dto(dto: PlcQueryDto) -> Self {
        Self {
            teacher_id: dto.teacher_id,
            plc_level: non_empty(dto.plc_level),
            start_date: dto.start_date,
            end_date: dto.end_date,
            page: dto.page,
            per_page: dto.entries,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlcActivityParam {
    pub teacher_id: i32,
    pub plc_date: NaiveDate,
    pub plc_level: String,
    pub topic: String,
    pub role: String,
    pub takeaway: Option<String>,
}

impl CreatePlcActivityParam {
    pub fn from_dto(dto: CreatePlcActivityDto) -> Self {
        Self {
            teacher_id: dto.teacher_id,
            plc_date: dto.plc_date,
            plc_level: sanitize(&dto.plc_level),
            topic: sanitize(&dto.topic),
            role: sanitize(&dto.role),
            takeaway: sanitize_opt(dto.takeaway),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlcActivityParam {
    pub id: i32,
    pub plc_date: Option<NaiveDate>,
    pub plc_level: Option<String>,
    pub topic: Option<String>,
    pub role: Option<String>,
    pub takeaway: Option<String>,
}

impl UpdatePlcActivityParam {
    pub fn from_dto(id: i32, dto: UpdatePlcActivityDto) -> Self {
        Self {
            id,
            plc_date: dto.plc_date,
            plc_level: dto.plc_level.as_deref().map(sanitize),
            topic: dto.topic.as_deref().map(sanitize),
            role: dto.role.as_deref().map(sanitize),
            takeaway: sanitize_opt(dto.takeaway),
        }
    }
}
