//! Dashboard aggregates.
//!
//! Each response is cached as JSON under a fixed key for the cache's lifetime, so
//! repeated dashboard loads inside that window skip the counting queries.

use std::{collections::HashMap, future::Future};

use chrono::{Datelike, Months, NaiveDate, Utc};
use entity::sea_orm_active_enums::{Region, TeacherStatus};
use sea_orm::{DatabaseConnection, Iterable};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    model::dashboard::{
        DashboardStatsDto, DashboardSummaryDto, MonthCountDto, RecentJournalDto,
        RecentVisitDto, RegionCountDto, StatusCountDto, TeacherOverviewDto, TrendsDto,
    },
    server::{
        data::{
            competency_assessment::CompetencyAssessmentRepository,
            mentoring_visit::MentoringVisitRepository, plc_activity::PlcActivityRepository,
            reflective_journal::ReflectiveJournalRepository, school::SchoolRepository,
            teacher::TeacherRepository,
        },
        error::{internal::InternalError, AppError},
        model::ActivityTally,
        service::cache::TtlCache,
        util::parse::month_key,
    },
};

/// Number of recent visits and journals on the stats page.
const RECENT_LIMIT: u64 = 10;
/// Months covered by the trends chart, including the current one.
const TREND_MONTHS: u32 = 6;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a TtlCache<serde_json::Value>,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a TtlCache<serde_json::Value>) -> Self {
        Self { db, cache }
    }

    /// Program totals, teacher breakdowns and the latest activity.
    pub async fn stats(&self) -> Result<DashboardStatsDto, AppError> {
        self.cached("stats", || self.build_stats()).await
    }

    /// Every teacher with school and per-activity counts.
    pub async fn teachers(&self) -> Result<Vec<TeacherOverviewDto>, AppError> {
        self.cached("teachers", || self.build_teachers()).await
    }

    /// Monthly activity counts for the last six months, oldest first.
    pub async fn trends(&self) -> Result<TrendsDto, AppError> {
        self.cached("trends", || self.build_trends()).await
    }

    async fn cached<T, F, Fut>(&self, key: &str, build: F) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        if let Some(value) = self.cache.get(key).await {
            match serde_json::from_value(value) {
                Ok(hit) => return Ok(hit),
                Err(err) => tracing::warn!("Discarding unreadable cache entry {}: {}", key, err),
            }
        }

        let fresh = build().await?;
        let value = serde_json::to_value(&fresh).map_err(InternalError::Serialization)?;
        self.cache.insert(key, value).await;

        Ok(fresh)
    }

    async fn build_stats(&self) -> Result<DashboardStatsDto, AppError> {
        let teacher_repo = TeacherRepository::new(self.db);
        let by_region = teacher_repo.count_by_region().await?;
        let by_status = teacher_repo.count_by_status().await?;

        // Breakdowns follow enum order.
        let teachers_by_region = Region::iter()
            .filter_map(|region| {
                let count = group_count(&by_region, &region);
                (count > 0).then_some(RegionCountDto { region, count })
            })
            .collect();
        let teachers_by_status = TeacherStatus::iter()
            .filter_map(|status| {
                let count = group_count(&by_status, &status);
                (count > 0).then_some(StatusCountDto { status, count })
            })
            .collect();

        let summary = DashboardSummaryDto {
            total_teachers: teacher_repo.count().await?,
            active_teachers: group_count(&by_status, &TeacherStatus::Active),
            total_schools: SchoolRepository::new(self.db).count().await?,
            total_visits: MentoringVisitRepository::new(self.db).count().await?,
            total_journals: ReflectiveJournalRepository::new(self.db).count().await?,
            total_plc_activities: PlcActivityRepository::new(self.db).count().await?,
        };

        let recent_visits = MentoringVisitRepository::new(self.db)
            .get_recent(RECENT_LIMIT)
            .await?
            .into_iter()
            .map(|visit| RecentVisitDto {
                id: visit.id,
                teacher_id: visit.teacher_id,
                teacher_name: visit.teacher.map(|t| t.full_name).unwrap_or_default(),
                visit_date: visit.visit_date,
                visit_type: visit.visit_type,
                focus_area: visit.focus_area,
            })
            .collect();
        let recent_journals = ReflectiveJournalRepository::new(self.db)
            .get_recent_with_teacher_name(RECENT_LIMIT)
            .await?
            .into_iter()
            .map(|(journal, teacher_name)| RecentJournalDto {
                id: journal.id,
                teacher_id: journal.teacher_id,
                teacher_name: teacher_name.unwrap_or_default(),
                month: journal.month,
                created_at: journal.created_at,
            })
            .collect();

        Ok(DashboardStatsDto {
            summary,
            teachers_by_region,
            teachers_by_status,
            recent_visits,
            recent_journals,
        })
    }

    async fn build_teachers(&self) -> Result<Vec<TeacherOverviewDto>, AppError> {
        let teachers = TeacherRepository::new(self.db).get_all_with_school().await?;

        let visits = MentoringVisitRepository::new(self.db)
            .activity_by_teacher(None)
            .await?;
        let journals = ReflectiveJournalRepository::new(self.db)
            .activity_by_teacher(None)
            .await?;
        let plc = PlcActivityRepository::new(self.db)
            .activity_by_teacher(None)
            .await?;
        let assessments = CompetencyAssessmentRepository::new(self.db)
            .activity_by_teacher(None)
            .await?;
        let count = |tallies: &HashMap<i32, ActivityTally>, id: i32| {
            tallies.get(&id).map_or(0, |tally| tally.count)
        };

        Ok(teachers
            .into_iter()
            .map(|t| {
                let id = t.teacher.id;
                TeacherOverviewDto {
                    id,
                    full_name: t.teacher.full_name,
                    school_name: t.school.school_name,
                    region: t.school.region,
                    status: t.teacher.status,
                    visits_count: count(&visits, id),
                    journals_count: count(&journals, id),
                    plc_count: count(&plc, id),
                    assessments_count: count(&assessments, id),
                }
            })
            .collect())
    }

    async fn build_trends(&self) -> Result<TrendsDto, AppError> {
        let today = Utc::now().date_naive();
        let months = trend_months(today);
        let (Some(first_month), Some(since)) = (months.first(), trend_start(today)) else {
            return Ok(TrendsDto {
                visits: Vec::new(),
                journals: Vec::new(),
                plc_activities: Vec::new(),
            });
        };

        let visit_months = MentoringVisitRepository::new(self.db)
            .counts_by_date_since(since)
            .await?
            .into_iter()
            .map(|(date, count)| (month_key(date), count));
        let journal_months = ReflectiveJournalRepository::new(self.db)
            .counts_by_month_since(first_month)
            .await?;
        let plc_months = PlcActivityRepository::new(self.db)
            .counts_by_date_since(since)
            .await?
            .into_iter()
            .map(|(date, count)| (month_key(date), count));

        Ok(TrendsDto {
            visits: month_counts(&months, visit_months),
            journals: month_counts(&months, journal_months),
            plc_activities: month_counts(&months, plc_months),
        })
    }
}

/// Count of `key` in grouped `(key, count)` rows, zero when absent.
fn group_count<K: PartialEq>(groups: &[(K, i64)], key: &K) -> u64 {
    groups
        .iter()
        .find(|(group, _)| group == key)
        .map_or(0, |(_, count)| (*count).max(0) as u64)
}

/// First day of the oldest month in the trend window.
fn trend_start(today: NaiveDate) -> Option<NaiveDate> {
    today
        .with_day(1)?
        .checked_sub_months(Months::new(TREND_MONTHS - 1))
}

/// `YYYY-MM` keys of the trend window, oldest first.
fn trend_months(today: NaiveDate) -> Vec<String> {
    let Some(start) = trend_start(today) else {
        return Vec::new();
    };

    (0..TREND_MONTHS)
        .filter_map(|offset| start.checked_add_months(Months::new(offset)))
        .map(month_key)
        .collect()
}

/// Sums grouped `(month, count)` rows into the window, keeping empty months at zero.
fn month_counts(
    window: &[String],
    observed: impl IntoIterator<Item = (String, i64)>,
) -> Vec<MonthCountDto> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for (month, count) in observed {
        *counts.entry(month).or_default() += count.max(0) as u64;
    }

    window
        .iter()
        .map(|month| MonthCountDto {
            month: month.clone(),
            count: counts.get(month).copied().unwrap_or(0),
        })
        .collect()
}
