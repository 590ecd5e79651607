//! Dashboard overview
//!
//! One month's totals and trend alongside all-time totals and the newest
//! transactions.

use serde::Serialize;

use crate::models::{Expense, Income, Period};
use crate::store::LedgerStore;

use super::monthly::{all_time_totals, MonthlyTotals, MonthlyTrend};
use super::register::recent;

/// Overview of the ledger for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewReport {
    pub period: Period,
    pub trend: MonthlyTrend,
    pub all_time: MonthlyTotals,
    /// Newest incomes across all months
    pub recent_incomes: Vec<Income>,
    /// Newest expenses across all months
    pub recent_expenses: Vec<Expense>,
}

impl OverviewReport {
    /// Generate the overview, listing up to `recent_count` of each transaction kind
    pub fn generate(store: &LedgerStore, period: Period, recent_count: usize) -> Self {
        Self {
            period,
            trend: MonthlyTrend::compute(store, period),
            all_time: all_time_totals(store),
            recent_incomes: recent(store.incomes(), recent_count),
            recent_expenses: recent(store.expenses(), recent_count),
        }
    }

    /// Totals for the overview month
    pub fn month(&self) -> &MonthlyTotals {
        &self.trend.current
    }
}
