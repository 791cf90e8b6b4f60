//! Indicator catalog models.
//!
//! Indicators are the assessment criteria evidence is tagged against. Each one holds
//! weighted sub-indicators, the checks a completeness score is computed from.

use entity::sea_orm_active_enums::IndicatorAspect;

use crate::{
    model::indicator::{
        CodeValidationDto, IndicatorDto, IndicatorListDto, IndicatorSummaryDto,
        SubIndicatorDetailDto, SubIndicatorDto, SubIndicatorListDto, ValidateCodesQueryDto,
    },
    server::model::evidence::split_indicator_codes,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SubIndicator {
    pub code: String,
    pub indicator_code: String,
    pub name: String,
    pub weight: i32,
    pub auto_detect: bool,
    pub sort_order: i32,
}

impl SubIndicator {
    pub fn from_entity(entity: entity::sub_indicator::Model) -> Self {
        Self {
            code: entity.code,
            indicator_code: entity.indicator_code,
            name: entity.name,
            weight: entity.weight,
            auto_detect: entity.auto_detect,
            sort_order: entity.sort_order,
        }
    }

    pub fn into_dto(self) -> SubIndicatorDto {
        SubIndicatorDto {
            code: self.code,
            indicator_code: self.indicator_code,
            name: self.name,
            weight: self.weight,
            auto_detect: self.auto_detect,
            sort_order: self.sort_order,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub code: String,
    pub name: String,
    pub aspect: IndicatorAspect,
    pub section: String,
    pub from_round: i32,
    pub sort_order: i32,
    /// `None` when the sub-indicators were not loaded.
    pub sub_indicators: Option<Vec<SubIndicator>>,
}

impl Indicator {
    pub fn from_entity(
        entity: entity::indicator::Model,
        sub_indicators: Option<Vec<SubIndicator>>,
    ) -> Self {
        Self {
            code: entity.code,
            name: entity.name,
            aspect: entity.aspect,
            section: entity.section,
            from_round: entity.from_round,
            sort_order: entity.sort_order,
            sub_indicators,
        }
    }

    /// Whether the indicator is scored in the given assessment round.
    pub fn in_round(&self, round: i32) -> bool {
        round >= self.from_round
    }

    pub fn into_dto(self) -> IndicatorDto {
        IndicatorDto {
            code: self.code,
            name: self.name,
            aspect: self.aspect,
            section: self.section,
            from_round: self.from_round,
            sort_order: self.sort_order,
            sub_indicators: self
                .sub_indicators
                .map(|subs| subs.into_iter().map(SubIndicator::into_dto).collect()),
        }
    }

    pub fn into_summary_dto(self) -> IndicatorSummaryDto {
        IndicatorSummaryDto {
            code: self.code,
            name: self.name,
            aspect: self.aspect,
            section: self.section,
        }
    }
}

pub fn into_list_dto(indicators: Vec<Indicator>) -> IndicatorListDto {
    IndicatorListDto {
        total: indicators.len() as u64,
        indicators: indicators.into_iter().map(Indicator::into_dto).collect(),
    }
}

/// A sub-indicator with its parent indicator (loaded without siblings).
#[derive(Debug, Clone, PartialEq)]
pub struct SubIndicatorDetail {
    pub sub_indicator: SubIndicator,
    pub indicator: Indicator,
}

impl SubIndicatorDetail {
    pub fn into_dto(self) -> SubIndicatorDetailDto {
        SubIndicatorDetailDto {
            sub_indicator: self.sub_indicator.into_dto(),
            indicator: self.indicator.into_summary_dto(),
        }
    }
}

pub fn into_sub_list_dto(details: Vec<SubIndicatorDetail>) -> SubIndicatorListDto {
    SubIndicatorListDto {
        total: details.len() as u64,
        sub_indicators: details
            .into_iter()
            .map(SubIndicatorDetail::into_dto)
            .collect(),
    }
}

/// Indicator and sub-indicator codes to check against the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorCodes {
    pub main: Vec<String>,
    pub sub: Vec<String>,
}

impl IndicatorCodes {
    pub fn from_dto(dto: ValidateCodesQueryDto) -> Self {
        Self {
            main: dto.main.as_deref().map(split_indicator_codes).unwrap_or_default(),
            sub: dto.sub.as_deref().map(split_indicator_codes).unwrap_or_default(),
        }
    }
}

/// Outcome of checking codes against the active catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeValidation {
    pub errors: Vec<String>,
}

impl CodeValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_dto(self) -> CodeValidationDto {
        CodeValidationDto {
            valid: self.is_valid(),
            errors: self.errors,
        }
    }
}

/// Codes from `requested` missing in `known`, in request order.
pub fn unknown_codes<'a>(requested: &'a [String], known: &[String]) -> Vec<&'a str> {
    requested
        .iter()
        .filter(|code| !known.contains(code))
        .map(String::as_str)
        .collect()
}
