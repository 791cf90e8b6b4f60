//! Indicator catalog lookups and code validation.

use entity::sea_orm_active_enums::IndicatorAspect;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::indicator::IndicatorRepository,
    error::AppError,
    model::indicator::{
        unknown_codes, CodeValidation, Indicator, IndicatorCodes, SubIndicatorDetail,
    },
};

pub struct IndicatorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IndicatorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, include_sub: bool) -> Result<Vec<Indicator>, AppError> {
        Ok(IndicatorRepository::new(self.db).get_all(include_sub).await?)
    }

    pub async fn get_by_code(&self, code: &str, include_sub: bool) -> Result<Indicator, AppError> {
        IndicatorRepository::new(self.db)
            .find_by_code(code, include_sub)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Indicator with code {} not found", code)))
    }

    pub async fn get_by_aspect(&self, aspect: IndicatorAspect) -> Result<Vec<Indicator>, AppError> {
        Ok(IndicatorRepository::new(self.db).get_by_aspect(aspect).await?)
    }

    /// Indicators in a catalog section, such as `LEARNING_MANAGEMENT`.
    pub async fn get_by_section(&self, section: &str) -> Result<Vec<Indicator>, AppError> {
        Ok(IndicatorRepository::new(self.db)
            .get_by_section(section)
            .await?)
    }

    pub async fn get_sub_indicators(
        &self,
        indicator_code: Option<&str>,
    ) -> Result<Vec<SubIndicatorDetail>, AppError> {
        Ok(IndicatorRepository::new(self.db)
            .get_sub_indicators(indicator_code)
            .await?)
    }

    pub async fn get_sub_indicator(&self, code: &str) -> Result<SubIndicatorDetail, AppError> {
        IndicatorRepository::new(self.db)
            .find_sub_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Sub-indicator with code {} not found", code))
            })
    }

    /// Reports which codes are not in the active catalog, main and sub separately.
    pub async fn validate(&self, codes: &IndicatorCodes) -> Result<CodeValidation, AppError> {
        let repo = IndicatorRepository::new(self.db);
        let mut errors = Vec::new();

        let known_main = repo.active_codes(&codes.main).await?;
        let invalid_main = unknown_codes(&codes.main, &known_main);
        if !invalid_main.is_empty() {
            errors.push(format!(
                "Invalid main indicator codes: {}",
                invalid_main.join(", ")
            ));
        }

        let known_sub = repo.active_sub_codes(&codes.sub).await?;
        let invalid_sub = unknown_codes(&codes.sub, &known_sub);
        if !invalid_sub.is_empty() {
            errors.push(format!(
                "Invalid sub-indicator codes: {}",
                invalid_sub.join(", ")
            ));
        }

        Ok(CodeValidation { errors })
    }

    /// Ensures every evidence tag names an active indicator or sub-indicator.
    ///
    /// # Returns
    /// - `Ok(())` - All codes are known, or there are none
    /// - `Err(AppError::BadRequest)` - Lists the unknown codes
    pub async fn ensure_known_codes(&self, codes: &[String]) -> Result<(), AppError> {
        if codes.is_empty() {
            return Ok(());
        }

        let repo = IndicatorRepository::new(self.db);
        let mut known = repo.active_codes(codes).await?;
        known.extend(repo.active_sub_codes(codes).await?);

        let unknown = unknown_codes(codes, &known);
        if !unknown.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Unknown indicator codes: {}",
                unknown.join(", ")
            )));
        }

        Ok(())
    }
}
