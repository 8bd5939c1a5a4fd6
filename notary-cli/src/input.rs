use std::sync::LazyLock;

use notary_core::DocumentType;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Anything that is not an ASCII digit or a decimal point.
static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("static pattern is valid"));

/// Reasons a transaction amount is refused before reaching the fee engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountInputError {
    #[error("amount '{0}' has more than one decimal point")]
    MultipleDecimalPoints(String),

    #[error("amount '{0}' has more than two decimal places")]
    TooManyDecimals(String),

    #[error("please enter a valid value")]
    Invalid,

    #[error("the value must be greater than zero")]
    NotPositive,
}

/// Strips everything but digits and `.` and checks the decimal format.
///
/// Thousands separators and currency symbols are dropped. A leading minus
/// sign is refused rather than stripped.
pub fn sanitize_amount(raw: &str) -> Result<String, AmountInputError> {
    if raw.trim_start().starts_with('-') {
        return Err(AmountInputError::NotPositive);
    }

    let cleaned = DISALLOWED_CHARS.replace_all(raw, "").into_owned();

    let mut parts = cleaned.split('.');
    let _whole = parts.next();
    let fraction = parts.next();
    if parts.next().is_some() {
        return Err(AmountInputError::MultipleDecimalPoints(raw.to_string()));
    }
    if fraction.is_some_and(|f| f.len() > 2) {
        return Err(AmountInputError::TooManyDecimals(raw.to_string()));
    }

    Ok(cleaned)
}

/// Parses a user-entered transaction amount, requiring a positive value.
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountInputError> {
    let cleaned = sanitize_amount(raw)?;
    let digits = cleaned.strip_suffix('.').unwrap_or(&cleaned);
    if digits.is_empty() {
        return Err(AmountInputError::Invalid);
    }
    let digits = if digits.starts_with('.') {
        format!("0{digits}")
    } else {
        digits.to_string()
    };

    let amount: Decimal = digits.parse().map_err(|e| {
        tracing::warn!(input = %raw, "invalid amount: {}", e);
        AmountInputError::Invalid
    })?;

    if amount <= Decimal::ZERO {
        return Err(AmountInputError::NotPositive);
    }

    Ok(amount)
}

/// Returns the amount to price `doc_type` with.
///
/// Flat-fee types never take an amount and always resolve to zero, whatever
/// was entered.
pub fn resolve_amount(
    doc_type: DocumentType,
    raw: Option<&str>,
) -> Result<Decimal, AmountInputError> {
    if !doc_type.requires_amount() {
        return Ok(Decimal::ZERO);
    }

    parse_amount(raw.unwrap_or_default())
}
