//! Database repository layer for all domain entities.
//!
//! Each repository borrows the connection and wraps the SeaORM queries for one table.
//! Repositories return `DbErr` and convert entity models into domain models at this
//! boundary, so services never see SeaORM rows. Dashboard and report counts are
//! grouped in SQL; only one row per group reaches Rust.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect, TryGetable,
};

use crate::server::model::ActivityTally;

pub mod budget_transaction;
pub mod competency_assessment;
pub mod consent;
pub mod development_plan;
pub mod evidence;
pub mod indicator;
pub mod mentoring_visit;
pub mod plc_activity;
pub mod project_budget;
pub mod reflective_journal;
pub mod school;
pub mod self_assessment;
pub mod teacher;
pub mod user;

/// Row count and latest `date_col` value per teacher, in one grouped query.
///
/// `latest_date` maps the raw column value to a date so date and timestamp columns
/// share one tally shape. With `teacher_ids` set, only those teachers are counted.
pub(crate) async fn activity_by_teacher<E, D, C>(
    db: &C,
    teacher_col: E::Column,
    date_col: E::Column,
    teacher_ids: Option<&[i32]>,
    latest_date: impl Fn(D) -> chrono::NaiveDate,
) -> Result<HashMap<i32, ActivityTally>, DbErr>
where
    E: EntityTrait,
    D: TryGetable,
    C: ConnectionTrait,
{
    let mut query = E::find()
        .select_only()
        .column(teacher_col)
        .column_as(teacher_col.count(), "count")
        .column_as(date_col.max(), "latest")
        .group_by(teacher_col);
    if let Some(ids) = teacher_ids {
        query = query.filter(teacher_col.is_in(ids.iter().copied()));
    }

    let rows: Vec<(i32, i64, Option<D>)> = query.into_tuple().all(db).await?;

    Ok(rows
        .into_iter()
        .map(|(teacher_id, count, latest)| {
            (
                teacher_id,
                ActivityTally {
                    count: count.max(0) as u64,
                    last_date: latest.map(&latest_date),
                },
            )
        })
        .collect())
}

#[cfg(test)]
mod test;
