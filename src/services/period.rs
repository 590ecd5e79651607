//! Period resolution for user input
//!
//! Turns the period strings accepted on the command line into a
//! [`Period`], relative to a fixed "today".

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Period;

const MONTH_NAMES: [(&str, u32); 24] = [
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
    ("sept", 9),
];

/// Resolves period strings relative to a reference date
#[derive(Debug, Clone, Copy)]
pub struct PeriodService {
    today: NaiveDate,
}

impl Default for PeriodService {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodService {
    /// Service anchored on the local date
    pub fn new() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    /// Service anchored on a fixed date
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    /// The month containing "today"
    pub fn current_period(&self) -> Period {
        Period::of(self.today)
    }

    /// Parse a period string, or fall back to the current month
    pub fn parse_or_current(&self, input: Option<&str>) -> LedgerResult<Period> {
        match input {
            Some(s) => self.parse(s),
            None => Ok(self.current_period()),
        }
    }

    /// Parse a period string
    ///
    /// Accepted forms:
    /// - `2026-01`
    /// - `January 2026`, `jan 2026`, or a bare month name (the most recent
    ///   such month, never one in the future)
    /// - `current`/`now`/`this`, `last`/`previous`/`prev`, `next`
    pub fn parse(&self, input: &str) -> LedgerResult<Period> {
        let lower = input.trim().to_lowercase();

        match lower.as_str() {
            "current" | "now" | "this" => return Ok(self.current_period()),
            "last" | "previous" | "prev" => return Ok(self.current_period().prev()),
            "next" => return Ok(self.current_period().next()),
            _ => {}
        }

        if let Some(period) = self.parse_month_name(&lower) {
            return Ok(period);
        }

        Period::parse(&lower)
            .map_err(|_| LedgerError::Validation(format!("Invalid period: '{}'", input.trim())))
    }

    fn parse_month_name(&self, input: &str) -> Option<Period> {
        let mut words = input.split_whitespace();
        let name = words.next()?;
        let month = MONTH_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, month)| *month)?;

        let year = match (words.next(), words.next()) {
            (None, _) => {
                if month > self.today.month() {
                    self.today.year() - 1
                } else {
                    self.today.year()
                }
            }
            (Some(year), None) => year.parse().ok()?,
            (Some(_), Some(_)) => return None,
        };

        Period::new(year, month).ok()
    }
}
