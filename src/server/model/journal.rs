//! Monthly reflective journal domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::journal::{CreateJournalDto, JournalDto, UpdateJournalDto},
    server::{
        error::AppError,
        util::{
            parse::parse_month,
            sanitize::{sanitize, sanitize_opt},
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Journal {
    pub id: i32,
    pub teacher_id: i32,
    /// `YYYY-MM`; at most one journal per teacher and month.
    pub month: String,
    pub reflection_text: String,
    pub success_story: Option<String>,
    pub difficulty: Option<String>,
    pub support_request: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Journal {
    pub fn from_entity(entity: entity::reflective_journal::Model) -> Self {
        Self {
            id: entity.id,
            teacher_id: entity.teacher_id,
            month: entity.month,
            reflection_text: entity.reflection_text,
            success_story: entity.success_story,
            difficulty: entity.difficulty,
            support_request: entity.support_request,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> JournalDto {
        JournalDto {
            id: self.id,
            teacher_id: self.teacher_id,
            month: self.month,
            reflection_text: self.reflection_text,
            success_story: self.success_story,
            difficulty: self.difficulty,
            support_request: self.support_request,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateJournalParam {
    pub teacher_id: i32,
    pub month: String,
    pub reflection_text: String,
    pub success_story: Option<String>,
    pub difficulty: Option<String>,
    pub support_request: Option<String>,
}

impl CreateJournalParam {
    pub fn from_dto(dto: CreateJournalDto) -> Result<Self, AppError> {
        Ok(Self {
            teacher_id: dto.teacher_id,
            month: parse_month(dto.month.trim())?,
            reflection_text: sanitize(&dto.reflection_text),
            success_story: sanitize_opt(dto.success_story),
            difficulty: sanitize_opt(dto.difficulty),
            support_request: sanitize_opt(dto.support_request),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateJournalParam {
    pub id: i32,
    pub month: Option<String>,
    pub reflection_text: Option<String>,
    pub success_story: Option<String>,
    pub difficulty: Option<String>,
    pub support_request: Option<String>,
}

impl UpdateJournalParam {
    pub fn from_dto(id: i32, dto: UpdateJournalDto) -> Result<Self, AppError> {
        let month = match dto.month {
            Some(month) => Some(parse_month(month.trim())?),
            None => None,
        };

        Ok(Self {
            id,
            month,
            reflection_text: dto.reflection_text.as_deref().map(sanitize),
            success_story: sanitize_opt(dto.success_story),
            difficulty: sanitize_opt(dto.difficulty),
            support_request: sanitize_opt(dto.support_request),
        })
    }
}
