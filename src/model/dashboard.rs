use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{Region, TeacherStatus, VisitType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DashboardSummaryDto {
    pub total_teachers: u64,
    pub active_teachers: u64,
    pub total_schools: u64,
    pub total_visits: u64,
    pub total_journals: u64,
    pub total_plc_activities: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegionCountDto {
    pub region: Region,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StatusCountDto {
    pub status: TeacherStatus,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RecentVisitDto {
    pub id: i32,
    pub teacher_id: i32,
    pub teacher_name: String,
    pub visit_date: NaiveDate,
    pub visit_type: VisitType,
    pub focus_area: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RecentJournalDto {
    pub id: i32,
    pub teacher_id: i32,
    pub teacher_name: String,
    pub month: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DashboardStatsDto {
    pub summary: DashboardSummaryDto,
    pub teachers_by_region: Vec<RegionCountDto>,
    pub teachers_by_status: Vec<StatusCountDto>,
    pub recent_visits: Vec<RecentVisitDto>,
    pub recent_journals: Vec<RecentJournalDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeacherOverviewDto {
    pub id: i32,
    pub full_name: String,
    pub school_name: String,
    pub region: Region,
    pub status: TeacherStatus,
    pub visits_count: u64,
    pub journals_count: u64,
    pub plc_count: u64,
    pub assessments_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MonthCountDto {
    /// Month in `YYYY-MM` form
    pub month: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TrendsDto {
    pub visits: Vec<MonthCountDto>,
    pub journals: Vec<MonthCountDto>,
    pub plc_activities: Vec<MonthCountDto>,
}
