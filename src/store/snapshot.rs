//! Plain-data snapshot of the store
//!
//! This is the only shape that crosses the persistence boundary: the
//! storage layer reads one on startup and writes one after each mutation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Expense, Income, Period};

/// Every record in the ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl LedgerSnapshot {
    /// Verify the snapshot could have been produced by the store
    pub(crate) fn check(&self) -> LedgerResult<()> {
        let mut income_ids = HashSet::new();
        for income in &self.incomes {
            income
                .validate()
                .map_err(|e| invalid(format!("income {}: {}", income.id, e)))?;
            if !income_ids.insert(income.id) {
                return Err(invalid(format!("duplicate income id {}", income.id)));
            }
        }

        let mut expense_ids = HashSet::new();
        for expense in &self.expenses {
            expense
                .validate()
                .map_err(|e| invalid(format!("expense {}: {}", expense.id, e)))?;
            if !expense_ids.insert(expense.id) {
                return Err(invalid(format!("duplicate expense id {}", expense.id)));
            }
        }

        let mut budget_ids = HashSet::new();
        let mut budget_keys: HashSet<(&str, Period)> = HashSet::new();
        for budget in &self.budgets {
            budget
                .validate()
                .map_err(|e| invalid(format!("budget {}: {}", budget.id, e)))?;
            if !budget_ids.insert(budget.id) {
                return Err(invalid(format!("duplicate budget id {}", budget.id)));
            }
            if !budget_keys.insert((budget.category.as_str(), budget.month)) {
                return Err(invalid(format!(
                    "more than one budget for {} in {}",
                    budget.category, budget.month
                )));
            }
        }

        Ok(())
    }

    /// Total number of records
    pub fn record_count(&self) -> usize {
        self.incomes.len() + self.expenses.len() + self.budgets.len()
    }
}

fn invalid(message: String) -> LedgerError {
    LedgerError::Validation(format!("Invalid ledger snapshot: {}", message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn january() -> Period {
        Period::new(2026, 1).unwrap()
    }

    #[test]
    fn test_empty_snapshot_is_valid() {
        assert!(LedgerSnapshot::default().check().is_ok());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let snapshot: LedgerSnapshot = serde_json::from_str(r#"{"incomes": []}"#).unwrap();
        assert_eq!(snapshot.record_count(), 0);
    }

    #[test]
    fn test_duplicate_budget_key_rejected() {
        let snapshot = LedgerSnapshot {
            budgets: vec![
                Budget::new("Food", january(), Money::from_units(600)),
                Budget::new("Food", january(), Money::from_units(700)),
            ],
            ..Default::default()
        };

        let err = snapshot.check().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("more than one budget"));
    }

    #[test]
    fn test_duplicate_expense_id_rejected() {
        let expense = Expense::new(
            Money::from_units(10),
            "Other",
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        );
        let snapshot = LedgerSnapshot {
            expenses: vec![expense.clone(), expense],
            ..Default::default()
        };

        assert!(snapshot.check().unwrap_err().is_validation());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let income = Income::new(
            Money::from_cents(-1),
            "Salary",
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        );
        let snapshot = LedgerSnapshot {
            incomes: vec![income],
            ..Default::default()
        };

        assert!(snapshot.check().is_err());
    }
}
