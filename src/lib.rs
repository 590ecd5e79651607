//! finance-ledger - personal income, expense and budget tracking
//!
//! Records incomes, expenses and per-category monthly budgets, and answers
//! the aggregate questions a budgeting dashboard asks: monthly totals and
//! balance, spending against each category's limit, and month-over-month
//! trends.
//!
//! # Architecture
//!
//! - `models`: ids, `Money`, `Period` and the three record types
//! - `store`: the in-memory entity store and its snapshot type
//! - `reports`: pure queries over the store (totals, spending, trends,
//!   filtering and sorting)
//! - `storage`: JSON persistence with atomic writes and first-run seeding
//! - `audit`: append-only log of every mutation
//! - `config`: data directory and user settings
//! - `services`: period parsing for user input
//! - `display`, `export`, `cli`: terminal output, CSV export and commands
//!
//! # Example
//!
//! ```rust
//! use finance_ledger::models::{NewExpense, Period};
//! use finance_ledger::reports::category_spending;
//! use finance_ledger::store::LedgerStore;
//!
//! let mut store = LedgerStore::new();
//! store.add_expense(&NewExpense::new("450", "Food", "2026-01-10")).unwrap();
//! store.add_expense(&NewExpense::new("300", "Food", "2026-01-22")).unwrap();
//!
//! let january = Period::new(2026, 1).unwrap();
//! store.set_budget("Food", january, "600").unwrap();
//!
//! let rows = category_spending(&store, january, &["Food"]);
//! assert!(rows[0].is_over_budget);
//! assert_eq!(rows[0].percentage, 125.0);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{LedgerError, LedgerResult};
