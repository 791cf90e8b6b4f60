use std::path::{Path, PathBuf};

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{consent::ConsentService, retention::RetentionService},
};

/// Every day at 02:00 server time.
const RETENTION_SCHEDULE: &str = "0 0 2 * * *";

/// Starts the nightly data retention scheduler
///
/// Each run deletes journals, evidence and assessments past their retention period
/// and marks consents whose expiry date has passed. A failed run is logged and the
/// scheduler keeps going.
///
/// # Arguments
/// - `db`: Database connection
/// - `upload_dir`: Directory stored evidence files are removed from
pub async fn start_scheduler(db: DatabaseConnection, upload_dir: PathBuf) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(RETENTION_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let upload_dir = upload_dir.clone();

        Box::pin(async move {
            if let Err(e) = run_retention(&db, &upload_dir).await {
                tracing::error!("Error running data retention: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Data retention scheduler started");

    Ok(())
}

/// Runs one retention pass: expired rows first, then expired consents.
async fn run_retention(db: &DatabaseConnection, upload_dir: &Path) -> Result<(), AppError> {
    let counts = RetentionService::new(db, upload_dir).cleanup(false).await?;

    tracing::info!(
        journals = counts.reflective_journals,
        evidence = counts.evidence_portfolio,
        assessments = counts.competency_assessments,
        "Data retention removed {} expired records",
        counts.total()
    );

    let expired = ConsentService::new(db).expire_all().await?;
    if expired > 0 {
        tracing::info!("Marked {} consents as expired", expired);
    }

    Ok(())
}
