//! Income model
//!
//! A single received payment (salary, freelance work, ...). Incomes are
//! immutable once recorded; they can only be deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;
use super::transaction::{
    check_amount, parse_amount, parse_date, require_text, Transaction, ValidationError,
};

/// Raw income input as submitted by a caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIncome {
    pub amount: String,
    pub source: String,
    pub date: String,
}

impl NewIncome {
    pub fn new(
        amount: impl Into<String>,
        source: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            source: source.into(),
            date: date.into(),
        }
    }
}

/// A recorded income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub amount: Money,
    pub source: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Income {
    /// Create an income with a fresh id
    pub fn new(amount: Money, source: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: IncomeId::new(),
            amount,
            source: source.into(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Normalize and validate raw input into a new income
    pub fn from_input(input: &NewIncome) -> Result<Self, ValidationError> {
        let amount = parse_amount(&input.amount)?;
        let source = require_text("Source", &input.source)?;
        let date = parse_date(&input.date)?;
        Ok(Self::new(amount, source, date))
    }

    /// Validate an already-built income (e.g. one loaded from disk)
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_amount(self.amount)?;
        require_text("Source", &self.source)?;
        Ok(())
    }
}

impl Transaction for Income {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> Money {
        self.amount
    }
}
