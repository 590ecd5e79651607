//! CLI command handlers
//!
//! Bridges clap argument parsing with the storage layer and the reports.

pub mod audit;
pub mod budget;
pub mod category;
pub mod expense;
pub mod income;
pub mod report;

pub use audit::handle_audit_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_report_command, ReportCommands};

use std::fs::File;
use std::path::Path;

use chrono::Local;

use crate::error::{LedgerError, LedgerResult};

/// Today's local date as `YYYY-MM-DD`, the default for new transactions
fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Create `path` and hand it to a CSV exporter
fn write_csv<F>(path: &Path, export: F) -> LedgerResult<()>
where
    F: FnOnce(File) -> LedgerResult<()>,
{
    let file = File::create(path)
        .map_err(|e| LedgerError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    export(file)
}
