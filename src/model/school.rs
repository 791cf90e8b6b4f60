use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::Region;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{api::default_entries, teacher::TeacherDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SchoolDto {
    pub id: i32,
    pub school_name: String,
    pub province: String,
    pub region: Region,
    pub school_size: String,
    pub area_type: String,
    pub student_total: i32,
    pub director_name: Option<String>,
    pub quality_school_flag: bool,
    pub community_context: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Short school reference embedded in teacher and report rows.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SchoolSummaryDto {
    pub id: i32,
    pub school_name: String,
    pub province: String,
    pub region: Region,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SchoolListItemDto {
    #[serde(flatten)]
    pub school: SchoolDto,
    pub teacher_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SchoolDetailDto {
    #[serde(flatten)]
    pub school: SchoolDto,
    pub teachers: Vec<TeacherDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedSchoolsDto {
    pub schools: Vec<SchoolListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateSchoolDto {
    pub school_name: String,
    pub province: String,
    pub region: Region,
    pub school_size: String,
    pub area_type: String,
    pub student_total: i32,
    pub director_name: Option<String>,
    #[serde(default)]
    pub quality_school_flag: bool,
    pub community_context: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateSchoolDto {
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

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct SchoolQueryDto {
    /// Substring of school name, province, or director name
    pub search: Option<String>,
    pub region: Option<Region>,
    pub province: Option<String>,
    pub school_size: Option<String>,
    pub area_type: Option<String>,
    /// Page number, 0-based (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default = "default_entries")]
    pub entries: u64,
}
