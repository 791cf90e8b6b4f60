//! Consent factory for PDPA records.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ConsentStatus, ConsentType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test consent records.
pub struct ConsentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    consent_type: ConsentType,
    status: ConsentStatus,
    expires_at: Option<DateTime<Utc>>,
}

impl<'a> ConsentFactory<'a> {
    /// Creates a factory for a GRANTED DATA_COLLECTION consent with no expiry.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            consent_type: ConsentType::DataCollection,
            status: ConsentStatus::Granted,
            expires_at: None,
        }
    }

    pub fn consent_type(mut self, consent_type: ConsentType) -> Self {
        self.consent_type = consent_type;
        self
    }

    pub fn status(mut self, status: ConsentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn expires_at(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the consent record.
    pub async fn build(self) -> Result<entity::consent::Model, DbErr> {
        let now = Utc::now();
        let granted_at = (self.status == ConsentStatus::Granted).then_some(now);
        let revoked_at = (self.status == ConsentStatus::Revoked).then_some(now);

        entity::consent::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            consent_type: ActiveValue::Set(self.consent_type),
            status: ActiveValue::Set(self.status),
            granted_at: ActiveValue::Set(granted_at),
            revoked_at: ActiveValue::Set(revoked_at),
            expires_at: ActiveValue::Set(self.expires_at),
            privacy_policy_version: ActiveValue::Set(Some("1.0".to_string())),
            terms_version: ActiveValue::Set(Some("1.0".to_string())),
            ip_address: ActiveValue::Set(None),
            user_agent: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a GRANTED consent of `consent_type` for the given user.
pub async fn create_consent(
    db: &DatabaseConnection,
    user_id: i32,
    consent_type: ConsentType,
) -> Result<entity::consent::Model, DbErr> {
    ConsentFactory::new(db, user_id)
        .consent_type(consent_type)
        .build()
        .await
}
