//! PDPA consent data repository.

use chrono::Utc;
use entity::sea_orm_active_enums::{ConsentStatus, ConsentType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::pdpa::{Consent, GrantConsentParam};

pub struct ConsentRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConsentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Grants a consent, updating the user's existing record of that type if present.
    pub async fn upsert_granted(&self, param: GrantConsentParam) -> Result<Consent, DbErr> {
        let now = Utc::now();
        let existing = entity::prelude::Consent::find()
            .filter(entity::consent::Column::UserId.eq(param.user_id))
            .filter(entity::consent::Column::ConsentType.eq(param.consent_type))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active: entity::consent::ActiveModel = existing.into();
                active.status = ActiveValue::Set(ConsentStatus::Granted);
                active.granted_at = ActiveValue::Set(Some(now));
                active.revoked_at = ActiveValue::Set(None);
                active.expires_at = ActiveValue::Set(param.expires_at);
                active.privacy_policy_version = ActiveValue::Set(param.privacy_policy_version);
                active.terms_version = ActiveValue::Set(param.terms_version);
                active.ip_address = ActiveValue::Set(Some(param.ip_address));
                active.user_agent = ActiveValue::Set(param.user_agent);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?
            }
            None => {
                entity::consent::ActiveModel {
                    user_id: ActiveValue::Set(param.user_id),
                    consent_type: ActiveValue::Set(param.consent_type),
                    status: ActiveValue::Set(ConsentStatus::Granted),
                    granted_at: ActiveValue::Set(Some(now)),
                    revoked_at: ActiveValue::Set(None),
                    expires_at: ActiveValue::Set(param.expires_at),
                    privacy_policy_version: ActiveValue::Set(param.privacy_policy_version),
                    terms_version: ActiveValue::Set(param.terms_version),
                    ip_address: ActiveValue::Set(Some(param.ip_address)),
                    user_agent: ActiveValue::Set(param.user_agent),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Consent::from_entity(entity))
    }

    pub async fn find_by_type(
        &self,
        user_id: i32,
        consent_type: ConsentType,
    ) -> Result<Option<Consent>, DbErr> {
        let entity = entity::prelude::Consent::find()
            .filter(entity::consent::Column::UserId.eq(user_id))
            .filter(entity::consent::Column::ConsentType.eq(consent_type))
            .one(self.db)
            .await?;

        Ok(entity.map(Consent::from_entity))
    }

    /// Gets a user's consents, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Consent>, DbErr> {
        let entities = entity::prelude::Consent::find()
            .filter(entity::consent::Column::UserId.eq(user_id))
            .order_by_desc(entity::consent::Column::CreatedAt)
            .order_by_desc(entity::consent::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Consent::from_entity).collect())
    }

    /// Flips GRANTED consents whose expiry has passed to EXPIRED.
    ///
    /// # Arguments
    /// - `user_id` - Restrict to one user's consents; `None` covers every user
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of consents expired
    pub async fn expire_stale(&self, user_id: Option<i32>) -> Result<u64, DbErr> {
        let now = Utc::now();
        let mut query = entity::prelude::Consent::update_many()
            .filter(entity::consent::Column::Status.eq(ConsentStatus::Granted))
            .filter(entity::consent::Column::ExpiresAt.is_not_null())
            .filter(entity::consent::Column::ExpiresAt.lt(now));
        if let Some(user_id) = user_id {
            query = query.filter(entity::consent::Column::UserId.eq(user_id));
        }

        let result = query
            .col_expr(
                entity::consent::Column::Status,
                sea_orm::sea_query::Expr::value(ConsentStatus::Expired),
            )
            .col_expr(
                entity::consent::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks a consent REVOKED.
    pub async fn revoke(&self, id: i32) -> Result<Option<Consent>, DbErr> {
        let Some(existing) = entity::prelude::Consent::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active: entity::consent::ActiveModel = existing.into();
        active.status = ActiveValue::Set(ConsentStatus::Revoked);
        active.revoked_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        let entity = active.update(self.db).await?;

        Ok(Some(Consent::from_entity(entity)))
    }
}
