//! Monthly totals and month-over-month trends

use serde::Serialize;

use crate::models::{Money, Period, Transaction};
use crate::store::LedgerStore;

/// Income, expense and balance for a span of time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    pub income: Money,
    pub expense: Money,
    /// `income - expense`
    pub balance: Money,
}

impl MonthlyTotals {
    fn new(income: Money, expense: Money) -> Self {
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

fn sum_in_period<'a, T, I>(records: I, period: Period) -> Money
where
    T: Transaction + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records
        .into_iter()
        .filter(|r| r.period() == period)
        .map(|r| r.amount())
        .sum()
}

/// Totals for one month; a month with no records yields zeros
pub fn monthly_totals(store: &LedgerStore, period: Period) -> MonthlyTotals {
    MonthlyTotals::new(
        sum_in_period(store.incomes(), period),
        sum_in_period(store.expenses(), period),
    )
}

/// Totals over every record in the store
pub fn all_time_totals(store: &LedgerStore) -> MonthlyTotals {
    MonthlyTotals::new(
        store.incomes().iter().map(|i| i.amount).sum(),
        store.expenses().iter().map(|e| e.amount).sum(),
    )
}

/// Percentage change from `previous` to `current`
///
/// A zero `previous` yields 0 rather than an infinite or undefined change.
pub fn trend(current: Money, previous: Money) -> f64 {
    if previous.is_zero() {
        return 0.0;
    }
    let previous = previous.as_f64();
    ((current.as_f64() - previous) / previous) * 100.0
}

/// A month's totals compared with the month before
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTrend {
    pub period: Period,
    pub current: MonthlyTotals,
    pub previous: MonthlyTotals,
    pub income_trend: f64,
    pub expense_trend: f64,
}

impl MonthlyTrend {
    pub fn compute(store: &LedgerStore, period: Period) -> Self {
        let current = monthly_totals(store, period);
        let previous = monthly_totals(store, period.prev());
        Self {
            period,
            current,
            previous,
            income_trend: trend(current.income, previous.income),
            expense_trend: trend(current.expense, previous.expense),
        }
    }

    /// The month the comparison is made against
    pub fn previous_period(&self) -> Period {
        self.period.prev()
    }
}
