//! Shared behavior and input normalization for incomes and expenses

use chrono::{DateTime, NaiveDate, Utc};

use super::money::{Money, MoneyParseError};
use super::period::Period;

/// Validation errors raised while normalizing mutation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount could not be read as a number
    InvalidAmount(String),
    /// Amount or limit below zero
    NegativeAmount,
    /// Amount or limit above the largest accepted value
    AmountTooLarge,
    /// Date in neither `YYYY-MM-DD` nor RFC 3339 form
    InvalidDate(String),
    /// A required text field was blank
    EmptyField(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount(s) => write!(f, "Amount is not a valid number: '{}'", s),
            Self::NegativeAmount => write!(f, "Amount cannot be negative"),
            Self::AmountTooLarge => write!(
                f,
                "Amount cannot exceed {}",
                Money::from_cents(Money::MAX_INPUT_CENTS).to_decimal_string()
            ),
            Self::InvalidDate(s) => {
                write!(f, "Invalid date '{}' (expected YYYY-MM-DD)", s)
            }
            Self::EmptyField(field) => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A dated ledger record that can be filtered and sorted for display
pub trait Transaction {
    /// Calendar date of the record
    fn date(&self) -> NaiveDate;

    /// Amount of the record
    fn amount(&self) -> Money;

    /// Expense category, if the record has one
    fn category(&self) -> Option<&str> {
        None
    }

    /// Period the record is reported in
    fn period(&self) -> Period {
        Period::of(self.date())
    }
}

/// Coerce user input to a non-negative amount
pub fn parse_amount(input: &str) -> Result<Money, ValidationError> {
    let amount = Money::parse(input).map_err(|e| match e {
        MoneyParseError::OutOfRange(_) => ValidationError::AmountTooLarge,
        MoneyParseError::InvalidFormat(_) => ValidationError::InvalidAmount(input.trim().to_string()),
    })?;
    check_amount(amount)
}

/// Reject amounts that are negative or above `Money::MAX_INPUT_CENTS`
pub fn check_amount(amount: Money) -> Result<Money, ValidationError> {
    if amount.is_negative() {
        return Err(ValidationError::NegativeAmount);
    }
    if amount.cents() > Money::MAX_INPUT_CENTS {
        return Err(ValidationError::AmountTooLarge);
    }
    Ok(amount)
}

/// Normalize a date given as `YYYY-MM-DD` or as an RFC 3339 instant
///
/// Instants are reduced to their UTC calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|instant| instant.with_timezone(&Utc).date_naive())
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Trim a required text field, rejecting blank values
pub fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field, mapping blank values to `None`
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
