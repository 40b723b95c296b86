//! Field parsing helpers shared by forms, CLI arguments and loaders
//!
//! Raw user input arrives as text; these turn it into typed values and
//! report failures as `Validation` errors naming the field.

use chrono::NaiveDate;

use crate::error::{AssetMapError, AssetMapResult};

/// Slack allowed when summing allocation weights of one financial asset
pub const ALLOCATION_TOLERANCE: f64 = 1e-9;

/// Require a non-blank text field, returning it trimmed
pub fn require_text(field: &str, raw: &str) -> AssetMapResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AssetMapError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Parse a monetary amount: finite and not negative
pub fn parse_amount(field: &str, raw: &str) -> AssetMapResult<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    let value: f64 = cleaned
        .parse()
        .map_err(|_| AssetMapError::validation(field, format!("'{}' is not a number", raw.trim())))?;
    check_amount(field, value)?;
    Ok(value)
}

pub fn check_amount(field: &str, value: f64) -> AssetMapResult<()> {
    if !value.is_finite() {
        return Err(AssetMapError::validation(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(AssetMapError::validation(field, "must not be negative"));
    }
    Ok(())
}

/// Parse an allocation weight in `(0, 1]`
pub fn parse_weight(raw: &str) -> AssetMapResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AssetMapError::validation("weight", format!("'{}' is not a number", raw.trim())))?;
    check_weight(value)?;
    Ok(value)
}

pub fn check_weight(value: f64) -> AssetMapResult<()> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(AssetMapError::validation(
            "weight",
            format!("{} is outside (0, 1]", value),
        ));
    }
    Ok(())
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(field: &str, raw: &str) -> AssetMapResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        AssetMapError::validation(field, format!("'{}' is not a YYYY-MM-DD date", raw.trim()))
    })
}
