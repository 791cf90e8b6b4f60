//! Evidence portfolio data repository.
//!
//! Indicator codes are stored one row per code in `evidence_indicator`. Reads load
//! the evidence rows first and then their indicator rows in a single `IN` query.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EvidenceType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::evidence::{
    CreateEvidenceParam, Evidence, EvidenceFilter, VerifyEvidenceParam,
};

pub struct EvidenceRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EvidenceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an evidence item and one indicator row per code.
    pub async fn create(&self, param: CreateEvidenceParam) -> Result<Evidence, DbErr> {
        let entity = entity::evidence_portfolio::ActiveModel {
            teacher_id: ActiveValue::Set(param.teacher_id),
            item_type: ActiveValue::Set(param.item_type),
            evidence_type: ActiveValue::Set(param.evidence_type),
            original_filename: ActiveValue::Set(param.original_filename),
            stored_filename: ActiveValue::Set(param.stored_filename),
            file_size: ActiveValue::Set(param.file_size),
            mime_type: ActiveValue::Set(param.mime_type),
            video_url: ActiveValue::Set(param.video_url),
            video_title: ActiveValue::Set(param.video_title),
            video_description: ActiveValue::Set(param.video_description),
            video_platform: ActiveValue::Set(param.video_platform),
            uploaded_by: ActiveValue::Set(param.uploaded_by),
            is_verified: ActiveValue::Set(false),
            verified_by: ActiveValue::Set(None),
            verified_at: ActiveValue::Set(None),
            self_assessment_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let indicators = self
            .insert_indicators(entity.id, &param.indicator_codes)
            .await?;

        Ok(Evidence::from_entity(entity, indicators))
    }

    async fn insert_indicators(
        &self,
        evidence_id: i32,
        codes: &[String],
    ) -> Result<Vec<entity::evidence_indicator::Model>, DbErr> {
        let mut indicators = Vec::with_capacity(codes.len());
        for code in codes {
            let indicator = entity::evidence_indicator::ActiveModel {
                evidence_id: ActiveValue::Set(evidence_id),
                indicator_code: ActiveValue::Set(code.clone()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            indicators.push(indicator);
        }

        Ok(indicators)
    }

    /// Attaches indicator rows to already loaded evidence rows, keeping their order.
    async fn with_indicators(
        &self,
        entities: Vec<entity::evidence_portfolio::Model>,
    ) -> Result<Vec<Evidence>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = entities.iter().map(|e| e.id).collect();
        let indicator_rows = entity::prelude::EvidenceIndicator::find()
            .filter(entity::evidence_indicator::Column::EvidenceId.is_in(ids))
            .order_by_asc(entity::evidence_indicator::Column::Id)
            .all(self.db)
            .await?;

        let mut by_evidence: HashMap<i32, Vec<entity::evidence_indicator::Model>> = HashMap::new();
        for row in indicator_rows {
            by_evidence.entry(row.evidence_id).or_default().push(row);
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let indicators = by_evidence.remove(&entity.id).unwrap_or_default();
                Evidence::from_entity(entity, indicators)
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Evidence>, DbErr> {
        let Some(entity) = entity::prelude::EvidencePortfolio::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_indicators(vec![entity]).await?.pop())
    }

    /// Gets a teacher's items newest first, narrowed by the filter.
    pub async fn get_by_teacher(
        &self,
        teacher_id: i32,
        filter: &EvidenceFilter,
    ) -> Result<Vec<Evidence>, DbErr> {
        let mut condition =
            Condition::all().add(entity::evidence_portfolio::Column::TeacherId.eq(teacher_id));
        if let Some(evidence_type) = filter.evidence_type {
            condition =
                condition.add(entity::evidence_portfolio::Column::EvidenceType.eq(evidence_type));
        }
        if let Some(is_verified) = filter.is_verified {
            condition =
                condition.add(entity::evidence_portfolio::Column::IsVerified.eq(is_verified));
        }
        if let Some(code) = &filter.indicator_code {
            let tagged: Vec<i32> = entity::prelude::EvidenceIndicator::find()
                .select_only()
                .column(entity::evidence_indicator::Column::EvidenceId)
                .filter(entity::evidence_indicator::Column::IndicatorCode.eq(code.as_str()))
                .into_tuple()
                .all(self.db)
                .await?;
            condition = condition.add(entity::evidence_portfolio::Column::Id.is_in(tagged));
        }

        let entities = entity::prelude::EvidencePortfolio::find()
            .filter(condition)
            .order_by_desc(entity::evidence_portfolio::Column::CreatedAt)
            .order_by_desc(entity::evidence_portfolio::Column::Id)
            .all(self.db)
            .await?;

        self.with_indicators(entities).await
    }

    /// Gets the latest items across all teachers.
    pub async fn get_latest(&self, limit: u64) -> Result<Vec<Evidence>, DbErr> {
        let entities = entity::prelude::EvidencePortfolio::find()
            .order_by_desc(entity::evidence_portfolio::Column::CreatedAt)
            .order_by_desc(entity::evidence_portfolio::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.with_indicators(entities).await
    }

    /// Gets the items linked to a self-assessment.
    pub async fn get_by_self_assessment(
        &self,
        self_assessment_id: i32,
    ) -> Result<Vec<Evidence>, DbErr> {
        let entities = entity::prelude::EvidencePortfolio::find()
            .filter(entity::evidence_portfolio::Column::SelfAssessmentId.eq(self_assessment_id))
            .order_by_asc(entity::evidence_portfolio::Column::Id)
            .all(self.db)
            .await?;

        self.with_indicators(entities).await
    }

    /// Marks an item verified, optionally replacing its type and indicator codes.
    ///
    /// # Returns
    /// - `Ok(Some(Evidence))` - The verified item
    /// - `Ok(None)` - No item with that id
    pub async fn verify(&self, param: VerifyEvidenceParam) -> Result<Option<Evidence>, DbErr> {
        let Some(existing) = entity::prelude::EvidencePortfolio::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::evidence_portfolio::ActiveModel = existing.into();
        active.is_verified = ActiveValue::Set(true);
        active.verified_by = ActiveValue::Set(Some(param.verified_by));
        active.verified_at = ActiveValue::Set(Some(Utc::now()));
        if let Some(evidence_type) = param.evidence_type {
            active.evidence_type = ActiveValue::Set(evidence_type);
        }
        active.update(self.db).await?;

        if let Some(codes) = param.indicator_codes {
            entity::prelude::EvidenceIndicator::delete_many()
                .filter(entity::evidence_indicator::Column::EvidenceId.eq(param.id))
                .exec(self.db)
                .await?;
            self.insert_indicators(param.id, &codes).await?;
        }

        self.find_by_id(param.id).await
    }

    /// Ids among `ids` that belong to the teacher.
    pub async fn owned_ids(&self, teacher_id: i32, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::EvidencePortfolio::find()
            .select_only()
            .column(entity::evidence_portfolio::Column::Id)
            .filter(entity::evidence_portfolio::Column::TeacherId.eq(teacher_id))
            .filter(entity::evidence_portfolio::Column::Id.is_in(ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Points the given items at a self-assessment.
    pub async fn link_to_self_assessment(
        &self,
        self_assessment_id: i32,
        ids: &[i32],
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::EvidencePortfolio::update_many()
            .filter(entity::evidence_portfolio::Column::Id.is_in(ids.to_vec()))
            .col_expr(
                entity::evidence_portfolio::Column::SelfAssessmentId,
                sea_orm::sea_query::Expr::value(Some(self_assessment_id)),
            )
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Clears the self-assessment link on every item that points at it.
    pub async fn unlink_self_assessment(&self, self_assessment_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::EvidencePortfolio::update_many()
            .filter(entity::evidence_portfolio::Column::SelfAssessmentId.eq(self_assessment_id))
            .col_expr(
                entity::evidence_portfolio::Column::SelfAssessmentId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::EvidencePortfolio::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Deletes a teacher's items and returns the stored filenames they referenced.
    pub async fn delete_by_teacher(&self, teacher_id: i32) -> Result<Vec<String>, DbErr> {
        let filenames: Vec<Option<String>> = entity::prelude::EvidencePortfolio::find()
            .select_only()
            .column(entity::evidence_portfolio::Column::StoredFilename)
            .filter(entity::evidence_portfolio::Column::TeacherId.eq(teacher_id))
            .into_tuple()
            .all(self.db)
            .await?;

        entity::prelude::EvidencePortfolio::delete_many()
            .filter(entity::evidence_portfolio::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;

        Ok(filenames.into_iter().flatten().collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::EvidencePortfolio::find()
            .count(self.db)
            .await
    }

    pub async fn count_verified(&self) -> Result<u64, DbErr> {
        entity::prelude::EvidencePortfolio::find()
            .filter(entity::evidence_portfolio::Column::IsVerified.eq(true))
            .count(self.db)
            .await
    }

    /// Item counts per evidence type, most common first.
    pub async fn counts_by_type(&self) -> Result<Vec<(EvidenceType, i64)>, DbErr> {
        entity::prelude::EvidencePortfolio::find()
            .select_only()
            .column(entity::evidence_portfolio::Column::EvidenceType)
            .column_as(entity::evidence_portfolio::Column::Id.count(), "count")
            .group_by(entity::evidence_portfolio::Column::EvidenceType)
            .order_by_desc(entity::evidence_portfolio::Column::Id.count())
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Tagging counts per indicator code, most used first then by code.
    pub async fn counts_by_indicator(&self) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::EvidenceIndicator::find()
            .select_only()
            .column(entity::evidence_indicator::Column::IndicatorCode)
            .column_as(entity::evidence_indicator::Column::Id.count(), "count")
            .group_by(entity::evidence_indicator::Column::IndicatorCode)
            .order_by_desc(entity::evidence_indicator::Column::Id.count())
            .order_by_asc(entity::evidence_indicator::Column::IndicatorCode)
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn count_created_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::EvidencePortfolio::find()
            .filter(entity::evidence_portfolio::Column::CreatedAt.lt(cutoff))
            .count(self.db)
            .await
    }

    /// Deletes items created before `cutoff` and returns their stored filenames.
    pub async fn delete_created_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<(u64, Vec<String>), DbErr> {
        let filenames: Vec<Option<String>> = entity::prelude::EvidencePortfolio::find()
            .select_only()
            .column(entity::evidence_portfolio::Column::StoredFilename)
            .filter(entity::evidence_portfolio::Column::CreatedAt.lt(cutoff))
            .into_tuple()
            .all(self.db)
            .await?;

        let result = entity::prelude::EvidencePortfolio::delete_many()
            .filter(entity::evidence_portfolio::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok((result.rows_affected, filenames.into_iter().flatten().collect()))
    }
}
