//! Export module for finance-ledger
//!
//! CSV output for the income and expense lists and the monthly budget
//! report.

pub mod csv;

pub use self::csv::{export_budget_report_csv, export_expenses_csv, export_incomes_csv};
