//! Category spending against monthly limits
//!
//! A category without a budget has a limit of zero and is treated as
//! untracked: it is never reported as over budget, whatever its spend.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::models::{Money, Period};
use crate::store::LedgerStore;

/// Spending percentage at which a tracked category counts as nearing its limit
pub const WARNING_THRESHOLD: f64 = 80.0;

/// Spend-vs-limit for one category in one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category: String,
    pub spent: Money,
    /// Monthly limit, zero when no budget is set
    pub limit: Money,
    pub is_over_budget: bool,
    /// `spent / limit * 100`, or 0 without a limit
    pub percentage: f64,
    /// `limit - spent`, negative once overspent
    pub remaining: Money,
}

impl CategorySpending {
    /// Build a row from the spent amount and limit
    pub fn new(category: impl Into<String>, spent: Money, limit: Money) -> Self {
        let tracked = limit.is_positive();
        let percentage = if tracked {
            (spent.as_f64() / limit.as_f64()) * 100.0
        } else {
            0.0
        };

        Self {
            category: category.into(),
            spent,
            limit,
            is_over_budget: tracked && spent > limit,
            percentage,
            remaining: limit - spent,
        }
    }

    pub fn status(&self) -> CategoryStatus {
        if !self.limit.is_positive() {
            CategoryStatus::Untracked
        } else if self.is_over_budget {
            CategoryStatus::Over
        } else if self.percentage >= WARNING_THRESHOLD {
            CategoryStatus::Warning
        } else {
            CategoryStatus::OnTrack
        }
    }
}

/// Budget utilization band of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    /// No limit set for the month
    Untracked,
    /// Below the warning threshold
    OnTrack,
    /// At or above the warning threshold but not over
    Warning,
    /// Spent more than the limit
    Over,
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Untracked => "No budget",
            Self::OnTrack => "On track",
            Self::Warning => "Near limit",
            Self::Over => "Over budget",
        };
        f.pad(label)
    }
}

/// Spend-vs-limit rows for each requested category, in the order given
///
/// A category listed more than once gets a single row, at its first position.
pub fn category_spending<S: AsRef<str>>(
    store: &LedgerStore,
    period: Period,
    categories: &[S],
) -> Vec<CategorySpending> {
    let mut seen = HashSet::new();
    categories
        .iter()
        .map(|category| category.as_ref())
        .filter(|category| seen.insert(*category))
        .map(|category| {
            let spent: Money = store
                .expenses()
                .iter()
                .filter(|e| e.category == category && period.contains(e.date))
                .map(|e| e.amount)
                .sum();
            let limit = store
                .budget_for(category, period)
                .map(|b| b.monthly_limit)
                .unwrap_or_default();
            CategorySpending::new(category, spent, limit)
        })
        .collect()
}

/// Summary figures across a list of category rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    pub total_budget: Money,
    pub total_spent: Money,
    pub over_budget_count: usize,
}

impl CategoryTotals {
    /// Budget left across all categories
    pub fn remaining(&self) -> Money {
        self.total_budget - self.total_spent
    }

    /// Whether less than half of the total budget has been spent
    pub fn is_under_half(&self) -> bool {
        self.total_spent.cents() * 2 < self.total_budget.cents()
    }
}

/// Reduce category rows to summary totals
pub fn totals_across_categories(spending: &[CategorySpending]) -> CategoryTotals {
    spending.iter().fold(CategoryTotals::default(), |mut totals, row| {
        totals.total_budget += row.limit;
        totals.total_spent += row.spent;
        if row.is_over_budget {
            totals.over_budget_count += 1;
        }
        totals
    })
}

/// Budget page for one month: every category row plus the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetReport {
    pub period: Period,
    pub categories: Vec<CategorySpending>,
    pub totals: CategoryTotals,
}

impl BudgetReport {
    /// Build the report for the store's full category vocabulary
    pub fn generate(store: &LedgerStore, period: Period) -> Self {
        Self::for_categories(store, period, &store.known_categories())
    }

    /// Build the report for an explicit category list
    pub fn for_categories<S: AsRef<str>>(
        store: &LedgerStore,
        period: Period,
        categories: &[S],
    ) -> Self {
        let categories = category_spending(store, period, categories);
        let totals = totals_across_categories(&categories);
        Self {
            period,
            categories,
            totals,
        }
    }

    /// Tracked categories at or above the warning threshold but not over
    pub fn near_limit(&self) -> Vec<&CategorySpending> {
        self.categories
            .iter()
            .filter(|c| c.status() == CategoryStatus::Warning && c.percentage < 100.0)
            .collect()
    }

    /// Categories that are over budget
    pub fn over_budget(&self) -> Vec<&CategorySpending> {
        self.categories.iter().filter(|c| c.is_over_budget).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;

    fn january() -> Period {
        Period::new(2026, 1).unwrap()
    }

    fn food_store() -> LedgerStore {
        let mut store = LedgerStore::new();
        store.add_expense(&NewExpense::new("450", "Food", "2026-01-10")).unwrap();
        store.add_expense(&NewExpense::new("300", "Food", "2026-01-22")).unwrap();
        store.set_budget("Food", january(), "600").unwrap();
        store
    }

    #[test]
    fn test_over_budget_scenario() {
        let rows = category_spending(&food_store(), january(), &["Food"]);

        assert_eq!(
            rows,
            vec![CategorySpending {
                category: "Food".to_string(),
                spent: Money::from_units(750),
                limit: Money::from_units(600),
                is_over_budget: true,
                percentage: 125.0,
                remaining: Money::from_units(-150),
            }]
        );
        assert_eq!(rows[0].status(), CategoryStatus::Over);
    }

    #[test]
    fn test_unset_budget_is_never_over() {
        let mut store = food_store();
        store.add_expense(&NewExpense::new("9999", "Travel", "2026-01-05")).unwrap();

        let rows = category_spending(&store, january(), &["Travel"]);
        assert_eq!(rows[0].spent, Money::from_units(9999));
        assert_eq!(rows[0].limit, Money::zero());
        assert!(!rows[0].is_over_budget);
        assert_eq!(rows[0].percentage, 0.0);
        assert_eq!(rows[0].remaining, Money::from_units(-9999));
        assert_eq!(rows[0].status(), CategoryStatus::Untracked);
    }

    #[test]
    fn test_other_months_do_not_count() {
        let mut store = food_store();
        store.add_expense(&NewExpense::new("100", "Food", "2026-02-01")).unwrap();
        store.add_expense(&NewExpense::new("100", "Food", "2025-01-15")).unwrap();

        let rows = category_spending(&store, january(), &["Food"]);
        assert_eq!(rows[0].spent, Money::from_units(750));

        // Budget is per month: February has no limit
        let feb = category_spending(&store, january().next(), &["Food"]);
        assert_eq!(feb[0].limit, Money::zero());
        assert!(!feb[0].is_over_budget);
    }

    #[test]
    fn test_rows_follow_requested_order() {
        let rows = category_spending(&food_store(), january(), &["Zoo", "Food", "Bar"]);
        let names: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Zoo", "Food", "Bar"]);
        assert_eq!(rows[0].spent, Money::zero());
    }

    #[test]
    fn test_repeated_category_counted_once() {
        let store = food_store();
        let rows = category_spending(&store, january(), &["Food", "Rent", "Food"]);

        let names: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Rent"]);

        let totals = totals_across_categories(&rows);
        assert_eq!(totals.total_spent, Money::from_units(750));
        assert_eq!(totals.over_budget_count, 1);
    }

    #[test]
    fn test_status_bands() {
        let limit = Money::from_units(100);
        assert_eq!(
            CategorySpending::new("a", Money::from_units(50), limit).status(),
            CategoryStatus::OnTrack
        );
        assert_eq!(
            CategorySpending::new("a", Money::from_units(80), limit).status(),
            CategoryStatus::Warning
        );
        assert_eq!(
            CategorySpending::new("a", Money::from_units(100), limit).status(),
            CategoryStatus::Warning
        );
        assert_eq!(
            CategorySpending::new("a", Money::from_cents(10001), limit).status(),
            CategoryStatus::Over
        );
    }

    #[test]
    fn test_totals_across_categories() {
        let rows = vec![
            CategorySpending::new("Food", Money::from_units(750), Money::from_units(600)),
            CategorySpending::new("Housing", Money::from_units(1500), Money::from_units(1600)),
            CategorySpending::new("Travel", Money::from_units(200), Money::zero()),
        ];

        let totals = totals_across_categories(&rows);
        assert_eq!(totals.total_budget, Money::from_units(2200));
        assert_eq!(totals.total_spent, Money::from_units(2450));
        assert_eq!(totals.over_budget_count, 1);
        assert_eq!(totals.remaining(), Money::from_units(-250));
        assert!(!totals.is_under_half());
    }

    #[test]
    fn test_totals_of_empty_list() {
        assert_eq!(totals_across_categories(&[]), CategoryTotals::default());
    }

    #[test]
    fn test_budget_report() {
        let mut store = food_store();
        store.set_budget("Housing", january(), "1000").unwrap();
        store.add_expense(&NewExpense::new("900", "Housing", "2026-01-01")).unwrap();

        let report = BudgetReport::generate(&store, january());

        assert!(report.categories.iter().any(|c| c.category == "Food"));
        assert_eq!(report.totals.over_budget_count, 1);
        assert_eq!(report.over_budget()[0].category, "Food");

        let near: Vec<&str> = report.near_limit().iter().map(|c| c.category.as_str()).collect();
        assert_eq!(near, vec!["Housing"]);
    }
}
