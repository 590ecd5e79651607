//! Budget model
//!
//! A monthly spending limit for one category. There is at most one budget
//! per (category, month); setting a limit again updates it in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::period::Period;
use super::transaction::{check_amount, ValidationError};

/// A monthly limit for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    pub category: String,

    /// The month this limit applies to
    pub month: Period,

    pub monthly_limit: Money,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget with a fresh id
    pub fn new(category: impl Into<String>, month: Period, monthly_limit: Money) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category: category.into(),
            month,
            monthly_limit,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the limit, keeping the id
    pub fn set_limit(&mut self, monthly_limit: Money) {
        self.monthly_limit = monthly_limit;
        self.updated_at = Utc::now();
    }

    /// Check whether this budget is the one for (category, month)
    pub fn is_for(&self, category: &str, month: Period) -> bool {
        self.category == category && self.month == month
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_amount(self.monthly_limit)?;
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyField("Category"));
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.month, self.category, self.monthly_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn january() -> Period {
        Period::new(2026, 1).unwrap()
    }

    #[test]
    fn test_new_budget() {
        let budget = Budget::new("Food & Dining", january(), Money::from_units(600));

        assert_eq!(budget.monthly_limit.cents(), 60000);
        assert!(budget.is_for("Food & Dining", january()));
        assert!(!budget.is_for("Food & Dining", january().next()));
        assert!(!budget.is_for("Housing", january()));
    }

    #[test]
    fn test_set_limit_keeps_id() {
        let mut budget = Budget::new("Housing", january(), Money::from_units(1600));
        let id = budget.id;
        let created = budget.created_at;

        budget.set_limit(Money::from_units(1700));

        assert_eq!(budget.id, id);
        assert_eq!(budget.created_at, created);
        assert_eq!(budget.monthly_limit, Money::from_units(1700));
        assert!(budget.updated_at >= created);
    }

    #[test]
    fn test_validation() {
        let budget = Budget::new("Housing", january(), Money::from_cents(-1));
        assert_eq!(budget.validate(), Err(ValidationError::NegativeAmount));

        let budget = Budget::new(
            "Housing",
            january(),
            Money::from_cents(Money::MAX_INPUT_CENTS + 1),
        );
        assert_eq!(budget.validate(), Err(ValidationError::AmountTooLarge));

        let budget = Budget::new(" ", january(), Money::zero());
        assert_eq!(budget.validate(), Err(ValidationError::EmptyField("Category")));
    }

    #[test]
    fn test_display() {
        let budget = Budget::new("Utilities", january(), Money::from_units(250));
        assert_eq!(budget.to_string(), "2026-01 Utilities: $250.00");
    }

    #[test]
    fn test_serialization() {
        let budget = Budget::new("Utilities", january(), Money::from_units(250));
        let json = serde_json::to_value(&budget).unwrap();
        assert_eq!(json["month"], "2026-01");

        let deserialized: Budget = serde_json::from_value(json).unwrap();
        assert_eq!(budget, deserialized);
    }
}
