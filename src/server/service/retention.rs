//! Data retention service.
//!
//! Journals and evidence are kept for five years, competency assessments for seven.
//! Cleanup deletes rows created before their dataset's cutoff; stored evidence files
//! are removed with their rows.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        competency_assessment::CompetencyAssessmentRepository, evidence::EvidenceRepository,
        reflective_journal::ReflectiveJournalRepository,
    },
    error::AppError,
    model::pdpa::{
        RetentionCounts, RetentionDataset, RetentionStats, ASSESSMENT_RETENTION_DAYS,
        EVIDENCE_RETENTION_DAYS, EXPIRY_WARNING_DAYS, JOURNAL_RETENTION_DAYS,
    },
    service::evidence::remove_stored_files,
};

pub struct RetentionService<'a> {
    db: &'a DatabaseConnection,
    upload_dir: &'a Path,
}

impl<'a> RetentionService<'a> {
    pub fn new(db: &'a DatabaseConnection, upload_dir: &'a Path) -> Self {
        Self { db, upload_dir }
    }

    /// Totals and expiring counts per dataset.
    pub async fn stats(&self) -> Result<RetentionStats, AppError> {
        let now = Utc::now();
        let expiring = self.counts_before(now, EXPIRY_WARNING_DAYS).await?;

        Ok(RetentionStats {
            reflective_journals: RetentionDataset {
                total: ReflectiveJournalRepository::new(self.db).count().await?,
                expiring: expiring.reflective_journals,
                retention_days: JOURNAL_RETENTION_DAYS,
            },
            evidence_portfolio: RetentionDataset {
                total: EvidenceRepository::new(self.db).count().await?,
                expiring: expiring.evidence_portfolio,
                retention_days: EVIDENCE_RETENTION_DAYS,
            },
            competency_assessments: RetentionDataset {
                total: CompetencyAssessmentRepository::new(self.db).count().await?,
                expiring: expiring.competency_assessments,
                retention_days: ASSESSMENT_RETENTION_DAYS,
            },
        })
    }

    /// Rows within `EXPIRY_WARNING_DAYS` of their retention limit, or past it.
    pub async fn expiring(&self) -> Result<RetentionCounts, AppError> {
        self.counts_before(Utc::now(), EXPIRY_WARNING_DAYS).await
    }

    /// Deletes rows past their retention period, or only counts them on a dry run.
    pub async fn cleanup(&self, dry_run: bool) -> Result<RetentionCounts, AppError> {
        let now = Utc::now();

        if dry_run {
            return self.counts_before(now, 0).await;
        }

        let reflective_journals = ReflectiveJournalRepository::new(self.db)
            .delete_created_before(cutoff(now, JOURNAL_RETENTION_DAYS, 0))
            .await?;
        let (evidence_portfolio, stored_files) = EvidenceRepository::new(self.db)
            .delete_created_before(cutoff(now, EVIDENCE_RETENTION_DAYS, 0))
            .await?;
        remove_stored_files(self.upload_dir, &stored_files).await;
        let competency_assessments = CompetencyAssessmentRepository::new(self.db)
            .delete_created_before(cutoff(now, ASSESSMENT_RETENTION_DAYS, 0))
            .await?;

        Ok(RetentionCounts {
            reflective_journals,
            evidence_portfolio,
            competency_assessments,
        })
    }

    /// Counts rows older than each dataset's retention period minus `margin_days`.
    async fn counts_before(
        &self,
        now: DateTime<Utc>,
        margin_days: i64,
    ) -> Result<RetentionCounts, AppError> {
        Ok(RetentionCounts {
            reflective_journals: ReflectiveJournalRepository::new(self.db)
                .count_created_before(cutoff(now, JOURNAL_RETENTION_DAYS, margin_days))
                .await?,
            evidence_portfolio: EvidenceRepository::new(self.db)
                .count_created_before(cutoff(now, EVIDENCE_RETENTION_DAYS, margin_days))
                .await?,
            competency_assessments: CompetencyAssessmentRepository::new(self.db)
                .count_created_before(cutoff(now, ASSESSMENT_RETENTION_DAYS, margin_days))
                .await?,
        })
    }
}

fn cutoff(now: DateTime<Utc>, retention_days: i64, margin_days: i64) -> DateTime<Utc> {
    now - Duration::days(retention_days - margin_days)
}
