//! Month key utilities.
//!
//! Royalties are keyed by calendar month in `YYYY-MM` form.

use chrono::{DateTime, NaiveDate, Utc};

use crate::server::error::contract::ContractError;

/// Formats the month containing `now` as `YYYY-MM`.
pub fn month_key(now: DateTime<Utc>) -> String {
    now.format("%Y-%m").to_string()
}

/// The current UTC month as `YYYY-MM`.
pub fn current_month_key() -> String {
    month_key(Utc::now())
}

/// Validates that `month` is exactly `YYYY-MM` and names a real month.
///
/// # Returns
/// - `Ok(())` - Valid month key
/// - `Err(ContractError::InvalidMonth)` - Wrong shape (`2025-1`, `2025/01`) or month out of range
pub fn validate_month(month: &str) -> Result<(), ContractError> {
    let well_formed = month.len() == 7
        && month.as_bytes()[4] == b'-'
        && month
            .bytes()
            .enumerate()
            .all(|(i, b)| i == 4 || b.is_ascii_digit());

    if !well_formed
        || NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").is_err()
    {
        return Err(ContractError::InvalidMonth(month.to_string()));
    }

    Ok(())
}
