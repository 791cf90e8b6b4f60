//! Validation of formatted string inputs.

use chrono::{Datelike, NaiveDate};

use crate::server::error::AppError;

/// Validates a journal month in `YYYY-MM` form with a month of 01 through 12.
///
/// # Arguments
/// - `value` - Month string from the request
///
/// # Returns
/// - `Ok(String)` - The validated month, unchanged
/// - `Err(AppError::BadRequest)` - Wrong shape or month out of range
pub fn parse_month(value: &str) -> Result<String, AppError> {
    let invalid = || AppError::BadRequest("Month must be in YYYY-MM format".to_string());

    let (year, month) = value.split_once('-').ok_or_else(invalid)?;

    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }
    if !year.bytes().all(|b| b.is_ascii_digit()) || !month.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let month_num: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month_num) {
        return Err(invalid());
    }

    Ok(value.to_string())
}

/// Formats a date as its `YYYY-MM` month key.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Validates a Thai citizen id: exactly 13 ASCII digits.
pub fn validate_citizen_id(value: &str) -> Result<(), AppError> {
    if value.len() == 13 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "Citizen ID must be exactly 13 digits".to_string(),
        ))
    }
}

/// Minimal email shape check: one `@` with a non-empty local part and a dotted domain.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid email address".to_string()))
    }
}

/// Validates that a 1-to-5 competency score is in range.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `score` - Submitted score
pub fn validate_score(field: &str, score: i32) -> Result<(), AppError> {
    if (1..=5).contains(&score) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "{} must be between 1 and 5",
            field
        )))
    }
}

/// Ensures a date range is ordered.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if end < start {
        return Err(AppError::BadRequest(
            "End date must be on or after start date".to_string(),
        ));
    }
    Ok(())
}
