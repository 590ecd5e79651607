//! Reports for finance-ledger
//!
//! The aggregation engine: monthly totals, category spending against
//! budgets, trends and the transaction register. Every function here is a
//! pure query over a [`LedgerStore`](crate::store::LedgerStore) and
//! recomputes its figures from the raw records on each call.

pub mod monthly;
pub mod overview;
pub mod register;
pub mod spending;

pub use monthly::{all_time_totals, monthly_totals, trend, MonthlyTotals, MonthlyTrend};
pub use overview::OverviewReport;
pub use register::{
    filter_transactions, recent, sort_by_date_descending, summarize_by_category, TransactionFilter,
};
pub use spending::{
    category_spending, totals_across_categories, BudgetReport, CategorySpending, CategoryStatus,
    CategoryTotals, WARNING_THRESHOLD,
};
