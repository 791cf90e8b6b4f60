//! PDPA consent service.
//!
//! Reads flip the caller's lapsed GRANTED consents to EXPIRED first, so the status
//! returned is always current.

use entity::sea_orm_active_enums::{ConsentStatus, ConsentType};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::consent::ConsentRepository,
    error::AppError,
    model::pdpa::{Consent, ConsentSummary, GrantConsentParam},
};

pub struct ConsentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConsentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's consents, newest first.
    pub async fn get_consents(&self, user_id: i32) -> Result<Vec<Consent>, AppError> {
        let repo = ConsentRepository::new(self.db);
        repo.expire_stale(Some(user_id)).await?;

        Ok(repo.get_by_user(user_id).await?)
    }

    pub async fn summary(&self, user_id: i32) -> Result<ConsentSummary, AppError> {
        let consents = self.get_consents(user_id).await?;
        Ok(ConsentSummary::from_consents(&consents))
    }

    /// Records the consent as GRANTED, replacing any earlier record of the same type.
    pub async fn grant(&self, param: GrantConsentParam) -> Result<Consent, AppError> {
        let consent = ConsentRepository::new(self.db)
            .upsert_granted(param)
            .await?;

        tracing::info!(
            "User {} granted {:?} consent",
            consent.user_id,
            consent.consent_type
        );

        Ok(consent)
    }

    /// Revokes a consent.
    ///
    /// # Returns
    /// - `Ok(Consent)` - The revoked consent
    /// - `Err(AppError::NotFound)` - No record of that type for the user
    /// - `Err(AppError::BadRequest)` - The consent is already revoked
    pub async fn revoke(
        &self,
        user_id: i32,
        consent_type: ConsentType,
    ) -> Result<Consent, AppError> {
        let repo = ConsentRepository::new(self.db);

        let existing = repo
            .find_by_type(user_id, consent_type)
            .await?
            .ok_or_else(|| not_found(consent_type))?;
        if existing.status == ConsentStatus::Revoked {
            return Err(AppError::BadRequest(
                "Consent is already revoked".to_string(),
            ));
        }

        let consent = repo
            .revoke(existing.id)
            .await?
            .ok_or_else(|| not_found(consent_type))?;

        tracing::info!("User {} revoked {:?} consent", user_id, consent_type);

        Ok(consent)
    }

    /// Whether the user currently holds a GRANTED consent of the type.
    pub async fn has_consent(
        &self,
        user_id: i32,
        consent_type: ConsentType,
    ) -> Result<bool, AppError> {
        let repo = ConsentRepository::new(self.db);
        repo.expire_stale(Some(user_id)).await?;

        Ok(repo
            .find_by_type(user_id, consent_type)
            .await?
            .is_some_and(|c| c.status == ConsentStatus::Granted))
    }

    /// Expires lapsed consents of every user. Run by the daily scheduler job.
    pub async fn expire_all(&self) -> Result<u64, AppError> {
        Ok(ConsentRepository::new(self.db).expire_stale(None).await?)
    }
}

fn not_found(consent_type: ConsentType) -> AppError {
    AppError::NotFound(format!("Consent {:?} not found", consent_type))
}
