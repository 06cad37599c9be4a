//! Parsing of submitted form fields.

use crate::server::error::contract::ContractError;

/// Trims `value` and rejects it when empty.
pub fn required(value: &str, field: &'static str) -> Result<String, ContractError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContractError::MissingField(field));
    }

    Ok(value.to_string())
}

/// Parses a money amount, which must be a finite, non-negative number.
pub fn parse_amount(value: &str) -> Result<f64, ContractError> {
    let amount = value
        .trim()
        .parse::<f64>()
        .map_err(|_| ContractError::InvalidAmount)?;

    validate_amount(amount)?;

    Ok(amount)
}

pub fn validate_amount(amount: f64) -> Result<(), ContractError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ContractError::InvalidAmount);
    }

    Ok(())
}

/// Parses a record ID submitted from a form, `what` names the record in the error.
pub fn parse_id(value: &str, what: &'static str) -> Result<i32, ContractError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ContractError::InvalidId(what))
}

/// Formats an amount with two decimals, as shown in notifications and tables.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}
