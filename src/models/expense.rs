//! Expense model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;
use super::transaction::{
    check_amount, optional_text, parse_amount, parse_date, require_text, Transaction,
    ValidationError,
};

/// Raw expense input as submitted by a caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub note: Option<String>,
}

impl NewExpense {
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
            note: None,
        }
    }

    /// Attach a free-text note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create an expense with a fresh id
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category: category.into(),
            date,
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Normalize and validate raw input into a new expense
    ///
    /// Any non-blank category is accepted, including ones never seen before.
    pub fn from_input(input: &NewExpense) -> Result<Self, ValidationError> {
        let amount = parse_amount(&input.amount)?;
        let category = require_text("Category", &input.category)?;
        let date = parse_date(&input.date)?;

        let mut expense = Self::new(amount, category, date);
        expense.note = optional_text(input.note.clone());
        Ok(expense)
    }

    /// Validate an already-built expense (e.g. one loaded from disk)
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_amount(self.amount)?;
        require_text("Category", &self.category)?;
        Ok(())
    }
}

impl Transaction for Expense {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> Money {
        self.amount
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}
