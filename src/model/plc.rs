use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::default_entries;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlcActivityDto {
    pub id: i32,
    pub teacher_id: i32,
    pub plc_date: NaiveDate,
    pub plc_level: String,
    pub topic: String,
    pub role: String,
    pub takeaway: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedPlcActivitiesDto {
    pub activities: Vec<PlcActivityDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Number of activities recorded at one PLC level.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlcGroupCountDto {
    pub plc_level: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreatePlcActivityDto {
    pub teacher_id: i32,
    pub plc_date: NaiveDate,
    pub plc_level: String,
    pub topic: String,
    pub role: String,
    pub takeaway: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdatePlcActivityDto {
    pub plc_date: Option<NaiveDate>,
    pub plc_level: Option<String>,
    pub topic: Option<String>,
    pub role: Option<String>,
    pub takeaway: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct PlcQueryDto {
    pub teacher_id: Option<i32>,
    pub plc_level: Option<String>,
    /// Inclusive lower bound on session date
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on session date
    pub end_date: Option<NaiveDate>,
    /// Page number, 0-based (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default = "default_entries")]
    pub entries: u64,
}
