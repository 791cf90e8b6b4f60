use entity::sea_orm_active_enums::IndicatorAspect;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubIndicatorDto {
    pub code: String,
    pub indicator_code: String,
    pub name: String,
    /// Share of the indicator score (0-100)
    pub weight: i32,
    /// Satisfied from program records instead of tagged evidence
    pub auto_detect: bool,
    pub sort_order: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct IndicatorDto {
    pub code: String,
    pub name: String,
    pub aspect: IndicatorAspect,
    pub section: String,
    /// First assessment round the indicator is scored in
    pub from_round: i32,
    pub sort_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_indicators: Option<Vec<SubIndicatorDto>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct IndicatorListDto {
    pub indicators: Vec<IndicatorDto>,
    pub total: u64,
}

/// Parent reference embedded in sub-indicator listings.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct IndicatorSummaryDto {
    pub code: String,
    pub name: String,
    pub aspect: IndicatorAspect,
    pub section: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubIndicatorDetailDto {
    #[serde(flatten)]
    pub sub_indicator: SubIndicatorDto,
    pub indicator: IndicatorSummaryDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubIndicatorListDto {
    pub sub_indicators: Vec<SubIndicatorDetailDto>,
    pub total: u64,
}

#[derive(Deserialize, Debug, IntoParams)]
pub struct IndicatorQueryDto {
    /// Embed each indicator's sub-indicators (default: true)
    #[serde(default = "default_include_sub")]
    pub include_sub: bool,
}

fn default_include_sub() -> bool {
    true
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct SubIndicatorQueryDto {
    /// Only sub-indicators of this indicator
    pub indicator_code: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct ValidateCodesQueryDto {
    /// Comma separated indicator codes
    pub main: Option<String>,
    /// Comma separated sub-indicator codes
    pub sub: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CodeValidationDto {
    pub valid: bool,
    pub errors: Vec<String>,
}
