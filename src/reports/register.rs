//! Transaction register
//!
//! Filtering and ordering of income and expense lists for display. Every
//! function returns a new list and leaves its input untouched.

use crate::models::{
    build_vocabulary, Expense, Money, Period, Transaction, ALL_CATEGORIES, DEFAULT_CATEGORIES,
};

/// Filter options for a transaction list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Exact category to keep; `None`, `""` and `"All"` keep every category
    pub category: Option<String>,
    /// Month to keep
    pub period: Option<Period>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    /// The category to filter on, once the "no filter" spellings are removed
    fn active_category(&self) -> Option<&str> {
        match self.category.as_deref() {
            None | Some("") => None,
            Some(c) if c == ALL_CATEGORIES => None,
            Some(c) => Some(c),
        }
    }

    /// Check if a record matches this filter
    ///
    /// Records without a category never match an active category filter.
    pub fn matches<T: Transaction>(&self, record: &T) -> bool {
        if let Some(category) = self.active_category() {
            if record.category() != Some(category) {
                return false;
            }
        }

        if let Some(period) = self.period {
            if record.period() != period {
                return false;
            }
        }

        true
    }
}

/// Records matching `filter`, in their original order
pub fn filter_transactions<T: Transaction + Clone>(
    records: &[T],
    filter: &TransactionFilter,
) -> Vec<T> {
    records
        .iter()
        .filter(|r| filter.matches(*r))
        .cloned()
        .collect()
}

/// Records newest first; records on the same date keep their relative order
pub fn sort_by_date_descending<T: Transaction + Clone>(records: &[T]) -> Vec<T> {
    let mut sorted = records.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));
    sorted
}

/// The `n` newest records
pub fn recent<T: Transaction + Clone>(records: &[T], n: usize) -> Vec<T> {
    let mut sorted = sort_by_date_descending(records);
    sorted.truncate(n);
    sorted
}

/// Total of `expenses` and the per-category subtotals behind it
///
/// Categories come in vocabulary order (seed list first, then first seen).
/// Categories whose subtotal is zero are left out.
pub fn summarize_by_category(expenses: &[Expense]) -> (Money, Vec<(String, Money)>) {
    let total = expenses.iter().map(|e| e.amount).sum();

    let categories = build_vocabulary(
        DEFAULT_CATEGORIES.iter().copied(),
        expenses.iter().map(|e| e.category.as_str()),
    );
    let breakdown = categories
        .into_iter()
        .map(|category| {
            let subtotal = expenses
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.amount)
                .sum();
            (category, subtotal)
        })
        .filter(|(_, subtotal): &(String, Money)| !subtotal.is_zero())
        .collect();

    (total, breakdown)
}
