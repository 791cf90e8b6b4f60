//! Indicator catalog repository. Only active rows are ever returned.

use std::collections::HashMap;

use entity::sea_orm_active_enums::IndicatorAspect;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::indicator::{Indicator, SubIndicator, SubIndicatorDetail};

pub struct IndicatorRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IndicatorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets active indicators in catalog order.
    pub async fn get_all(&self, include_sub: bool) -> Result<Vec<Indicator>, DbErr> {
        self.find_where(Condition::all(), include_sub).await
    }

    pub async fn find_by_code(
        &self,
        code: &str,
        include_sub: bool,
    ) -> Result<Option<Indicator>, DbErr> {
        let mut found = self
            .find_where(
                Condition::all().add(entity::indicator::Column::Code.eq(code)),
                include_sub,
            )
            .await?;

        Ok(found.pop())
    }

    pub async fn get_by_aspect(&self, aspect: IndicatorAspect) -> Result<Vec<Indicator>, DbErr> {
        self.find_where(
            Condition::all().add(entity::indicator::Column::Aspect.eq(aspect)),
            true,
        )
        .await
    }

    pub async fn get_by_section(&self, section: &str) -> Result<Vec<Indicator>, DbErr> {
        self.find_where(
            Condition::all().add(entity::indicator::Column::Section.eq(section)),
            true,
        )
        .await
    }

    /// Gets active sub-indicators of active indicators, optionally for one indicator.
    ///
    /// Ordered by indicator then by position within the indicator.
    pub async fn get_sub_indicators(
        &self,
        indicator_code: Option<&str>,
    ) -> Result<Vec<SubIndicatorDetail>, DbErr> {
        let mut condition = Condition::all()
            .add(entity::sub_indicator::Column::IsActive.eq(true))
            .add(entity::indicator::Column::IsActive.eq(true));
        if let Some(code) = indicator_code {
            condition = condition.add(entity::sub_indicator::Column::IndicatorCode.eq(code));
        }

        let rows = entity::prelude::SubIndicator::find()
            .find_also_related(entity::prelude::Indicator)
            .filter(condition)
            .order_by_asc(entity::indicator::Column::SortOrder)
            .order_by_asc(entity::sub_indicator::Column::SortOrder)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(sub, indicator)| {
                indicator.map(|indicator| SubIndicatorDetail {
                    sub_indicator: SubIndicator::from_entity(sub),
                    indicator: Indicator::from_entity(indicator, None),
                })
            })
            .collect())
    }

    pub async fn find_sub_by_code(&self, code: &str) -> Result<Option<SubIndicatorDetail>, DbErr> {
        let row = entity::prelude::SubIndicator::find()
            .find_also_related(entity::prelude::Indicator)
            .filter(
                Condition::all()
                    .add(entity::sub_indicator::Column::Code.eq(code))
                    .add(entity::sub_indicator::Column::IsActive.eq(true))
                    .add(entity::indicator::Column::IsActive.eq(true)),
            )
            .one(self.db)
            .await?;

        Ok(row.and_then(|(sub, indicator)| {
            indicator.map(|indicator| SubIndicatorDetail {
                sub_indicator: SubIndicator::from_entity(sub),
                indicator: Indicator::from_entity(indicator, None),
            })
        }))
    }

    /// Which of `codes` name an active indicator.
    pub async fn active_codes(&self, codes: &[String]) -> Result<Vec<String>, DbErr> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Indicator::find()
            .select_only()
            .column(entity::indicator::Column::Code)
            .filter(entity::indicator::Column::Code.is_in(codes.iter().map(String::as_str)))
            .filter(entity::indicator::Column::IsActive.eq(true))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Which of `codes` name an active sub-indicator.
    pub async fn active_sub_codes(&self, codes: &[String]) -> Result<Vec<String>, DbErr> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::SubIndicator::find()
            .select_only()
            .column(entity::sub_indicator::Column::Code)
            .filter(entity::sub_indicator::Column::Code.is_in(codes.iter().map(String::as_str)))
            .filter(entity::sub_indicator::Column::IsActive.eq(true))
            .into_tuple()
            .all(self.db)
            .await
    }

    async fn find_where(
        &self,
        condition: Condition,
        include_sub: bool,
    ) -> Result<Vec<Indicator>, DbErr> {
        let entities = entity::prelude::Indicator::find()
            .filter(condition.add(entity::indicator::Column::IsActive.eq(true)))
            .order_by_asc(entity::indicator::Column::SortOrder)
            .all(self.db)
            .await?;

        if !include_sub {
            return Ok(entities
                .into_iter()
                .map(|entity| Indicator::from_entity(entity, None))
                .collect());
        }

        let codes: Vec<&str> = entities.iter().map(|i| i.code.as_str()).collect();
        let mut by_indicator: HashMap<String, Vec<SubIndicator>> = HashMap::new();
        if !codes.is_empty() {
            let subs = entity::prelude::SubIndicator::find()
                .filter(entity::sub_indicator::Column::IndicatorCode.is_in(codes))
                .filter(entity::sub_indicator::Column::IsActive.eq(true))
                .order_by_asc(entity::sub_indicator::Column::SortOrder)
                .all(self.db)
                .await?;
            for sub in subs {
                by_indicator
                    .entry(sub.indicator_code.clone())
                    .or_default()
                    .push(SubIndicator::from_entity(sub));
            }
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let subs = by_indicator.remove(&entity.code).unwrap_or_default();
                Indicator::from_entity(entity, Some(subs))
            })
            .collect())
    }
}
