//! Demonstration data for a fresh ledger
//!
//! Used when no ledger file exists yet and seeding is enabled in settings.
//! Records go through the normal store mutations so they get fresh ids
//! and the same validation as user input.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{NewExpense, NewIncome, Period, DEFAULT_CATEGORIES};
use crate::store::LedgerStore;

const SEED_INCOMES: &[(&str, &str, &str)] = &[
    ("5000", "Salary", "2026-01-15"),
    ("1200", "Freelance", "2026-01-20"),
    ("300", "Investment", "2026-01-25"),
    ("4800", "Salary", "2025-12-15"),
    ("500", "Freelance", "2025-12-22"),
];

const SEED_EXPENSES: &[(&str, &str, &str, Option<&str>)] = &[
    ("1500", "Housing", "2026-01-01", Some("Monthly rent")),
    ("200", "Utilities", "2026-01-05", Some("Electric & water bills")),
    ("450", "Food & Dining", "2026-01-10", Some("Groceries")),
    ("120", "Transportation", "2026-01-12", Some("Gas and transit")),
    ("80", "Entertainment", "2026-01-15", Some("Netflix and Spotify")),
    ("250", "Shopping", "2026-01-18", Some("Clothing")),
    ("150", "Healthcare", "2026-01-20", Some("Doctor visit")),
    ("300", "Food & Dining", "2026-01-22", Some("Dining out")),
    ("1400", "Housing", "2025-12-01", Some("Monthly rent")),
    ("180", "Utilities", "2025-12-05", None),
    ("380", "Food & Dining", "2025-12-10", Some("Groceries")),
    ("600", "Shopping", "2025-12-20", Some("Holiday gifts")),
];

/// Monthly limits per seed category, in `DEFAULT_CATEGORIES` order
const SEED_LIMITS: &[&str] = &[
    "1600", "300", "600", "250", "200", "150", "200", "100", "150", "100",
];

/// Months the seed budgets apply to
const SEED_MONTHS: &[(i32, u32)] = &[(2025, 12), (2026, 1)];

/// Build a store holding the demonstration records
pub fn seed_store() -> LedgerResult<LedgerStore> {
    let mut store = LedgerStore::new();

    for (amount, source, date) in SEED_INCOMES {
        store.add_income(&NewIncome::new(*amount, *source, *date))?;
    }

    for (amount, category, date, note) in SEED_EXPENSES {
        let mut input = NewExpense::new(*amount, *category, *date);
        if let Some(note) = note {
            input = input.with_note(*note);
        }
        store.add_expense(&input)?;
    }

    for (year, month) in SEED_MONTHS {
        let period =
            Period::new(*year, *month).map_err(|e| LedgerError::Validation(e.to_string()))?;
        for (category, limit) in DEFAULT_CATEGORIES.iter().zip(SEED_LIMITS) {
            store.set_budget(category, period, limit)?;
        }
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::{category_spending, monthly_totals};

    #[test]
    fn test_seed_counts() {
        let store = seed_store().unwrap();

        assert_eq!(store.incomes().len(), 5);
        assert_eq!(store.expenses().len(), 12);
        assert_eq!(store.budgets().len(), DEFAULT_CATEGORIES.len() * 2);
        assert_eq!(SEED_LIMITS.len(), DEFAULT_CATEGORIES.len());
    }

    #[test]
    fn test_seed_january_figures() {
        let store = seed_store().unwrap();
        let january = Period::new(2026, 1).unwrap();

        let totals = monthly_totals(&store, january);
        assert_eq!(totals.income, Money::from_units(6500));
        assert_eq!(totals.expense, Money::from_units(3050));
        assert_eq!(totals.balance, Money::from_units(3450));

        let food = category_spending(&store, january, &["Food & Dining"]);
        assert_eq!(food[0].spent, Money::from_units(750));
        assert_eq!(food[0].limit, Money::from_units(600));
        assert!(food[0].is_over_budget);
    }

    #[test]
    fn test_seed_note_is_optional() {
        let store = seed_store().unwrap();
        let without_note = store
            .expenses()
            .iter()
            .filter(|e| e.note.is_none())
            .count();
        assert_eq!(without_note, 1);
    }
}
