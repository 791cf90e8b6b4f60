use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Plain `page`/`entries` query for list endpoints without filters.
#[derive(Deserialize, Debug, IntoParams)]
pub struct PaginationParams {
    /// Page number, 0-based (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default = "default_entries")]
    pub entries: u64,
}

pub fn default_entries() -> u64 {
    10
}

/// Optional `teacher_id` filter shared by per-teacher list endpoints.
#[derive(Deserialize, Debug, IntoParams)]
pub struct TeacherFilterParams {
    pub teacher_id: Option<i32>,
}

/// Number of rows affected by a bulk operation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CountDto {
    pub count: u64,
}
