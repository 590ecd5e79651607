//! Calendar month periods
//!
//! Every aggregation groups transactions by the calendar month of their
//! date. Months are one-indexed (1 = January) throughout the crate.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A (year, month) pair identifying a calendar month
///
/// Ordering is chronological: by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, validating the month and the year
    ///
    /// The year must be one chrono can represent.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(PeriodParseError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// The period a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// One-indexed month (1..=12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Canonical `YYYY-MM` key
    pub fn key(&self) -> String {
        period_key(self.year, self.month)
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next().start_date() - Duration::days(1)
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The immediately preceding month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Human-friendly label ("January 2026")
    pub fn label(&self) -> String {
        format!("{} {}", self.start_date().format("%B"), self.year)
    }

    /// Parse a `YYYY-MM` key
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let invalid = || PeriodParseError::InvalidFormat(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.is_empty() || month.is_empty() || month.len() > 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

/// Canonical string key for a (year, month) pair: zero-padded `YYYY-MM`
pub fn period_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.key())
    }
}

impl std::str::FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvalidYear(i32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => {
                write!(f, "Invalid period format: '{}' (expected YYYY-MM)", s)
            }
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            PeriodParseError::InvalidYear(y) => write!(f, "Year out of range: {}", y),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_of_is_one_indexed() {
        let period = Period::of(date(2026, 1, 10));
        assert_eq!(period.year(), 2026);
        assert_eq!(period.month(), 1);
        assert_eq!(period.key(), "2026-01");
    }

    #[test]
    fn test_bounds() {
        let feb = Period::new(2024, 2).unwrap();
        assert_eq!(feb.start_date(), date(2024, 2, 1));
        assert_eq!(feb.end_date(), date(2024, 2, 29));

        let dec = Period::new(2025, 12).unwrap();
        assert_eq!(dec.end_date(), date(2025, 12, 31));
    }

    #[test]
    fn test_navigation_wraps_years() {
        let jan = Period::new(2026, 1).unwrap();
        assert_eq!(jan.prev(), Period::new(2025, 12).unwrap());
        assert_eq!(jan.prev().next(), jan);
    }

    #[test]
    fn test_contains() {
        let jan = Period::new(2026, 1).unwrap();
        assert!(jan.contains(date(2026, 1, 31)));
        assert!(!jan.contains(date(2026, 2, 1)));
        assert!(!jan.contains(date(2025, 1, 15)));
    }

    #[test]
    fn test_keys_sort_chronologically() {
        let periods = [
            Period::new(2025, 9).unwrap(),
            Period::new(2025, 10).unwrap(),
            Period::new(2026, 1).unwrap(),
        ];
        let mut keys: Vec<String> = periods.iter().map(Period::key).collect();
        keys.reverse();
        keys.sort();
        assert_eq!(keys, vec!["2025-09", "2025-10", "2026-01"]);
        assert!(periods[0] < periods[1] && periods[1] < periods[2]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Period::parse("2026-01").unwrap(), Period::new(2026, 1).unwrap());
        assert_eq!(Period::parse("2026-1").unwrap(), Period::new(2026, 1).unwrap());
        assert_eq!(Period::parse("2026-13"), Err(PeriodParseError::InvalidMonth(13)));
        assert_eq!(Period::parse("2026-00"), Err(PeriodParseError::InvalidMonth(0)));
        assert!(Period::parse("January").is_err());
        assert!(Period::parse("2026-01-05").is_err());
    }

    #[test]
    fn test_years_outside_calendar_rejected() {
        assert_eq!(
            Period::new(i32::MAX, 1),
            Err(PeriodParseError::InvalidYear(i32::MAX))
        );
        assert_eq!(
            Period::new(i32::MIN, 12),
            Err(PeriodParseError::InvalidYear(i32::MIN))
        );
        assert_eq!(
            Period::parse("999999-03"),
            Err(PeriodParseError::InvalidYear(999999))
        );
        assert!(serde_json::from_str::<Period>("\"999999-03\"").is_err());

        let far = Period::new(9999, 12).unwrap();
        assert_eq!(far.label(), "December 9999");
    }

    #[test]
    fn test_label() {
        assert_eq!(Period::new(2026, 1).unwrap().label(), "January 2026");
    }

    #[test]
    fn test_serialization() {
        let period = Period::new(2026, 1).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"2026-01\"");

        let deserialized: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
        assert!(serde_json::from_str::<Period>("\"2026-14\"").is_err());
    }
}
