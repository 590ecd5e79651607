//! Display formatting for terminal output
//!
//! Formatters take the user's [`Settings`] for the currency symbol and
//! date format.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use report::{format_budget_report, format_monthly_trend, format_overview};
pub use transaction::{
    format_expense_details, format_expense_list, format_expense_summary, format_income_details,
    format_income_list,
};

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::config::Settings;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date with the configured format
///
/// A format string that is invalid, or that asks for time fields a date
/// doesn't have, falls back to `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate, settings: &Settings) -> String {
    let configured = settings.date_format.as_str();
    if !StrftimeItems::new(configured).any(|item| matches!(item, Item::Error)) {
        let mut rendered = String::new();
        if write!(rendered, "{}", date.format(configured)).is_ok() {
            return rendered;
        }
    }
    date.format(FALLBACK_DATE_FORMAT).to_string()
}
