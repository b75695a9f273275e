//! Calendar months
//!
//! Budget goals default to covering the calendar month they were created in.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, e.g. "2024-06"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BudgetMonth {
    first_day: NaiveDate,
}

impl BudgetMonth {
    /// Create a month from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date - Duration::days(i64::from(date.day0())),
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.first_day
    }

    pub fn end_date(&self) -> NaiveDate {
        self.next().first_day - Duration::days(1)
    }

    /// The date for a day of this month, clamped to the month's last day
    pub fn day(&self, day: u32) -> NaiveDate {
        let offset = i64::from(day.max(1) - 1);
        let date = self.first_day + Duration::days(offset);
        date.min(self.end_date())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    pub fn next(&self) -> Self {
        // 31 days past the first always lands in the following month
        Self::containing(self.first_day + Duration::days(31))
    }

    pub fn prev(&self) -> Self {
        Self::containing(self.first_day - Duration::days(1))
    }

    /// Parse "YYYY-MM"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let invalid = || PeriodParseError(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).ok_or_else(invalid)
    }
}

impl fmt::Display for BudgetMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl TryFrom<String> for BudgetMonth {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BudgetMonth> for String {
    fn from(month: BudgetMonth) -> Self {
        month.to_string()
    }
}

/// Error for unparseable month strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(pub String);

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month '{}' (expected YYYY-MM)", self.0)
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
    fn test_month_bounds() {
        let june = BudgetMonth::new(2024, 6).unwrap();
        assert_eq!(june.start_date(), date(2024, 6, 1));
        assert_eq!(june.end_date(), date(2024, 6, 30));

        let feb_leap = BudgetMonth::new(2024, 2).unwrap();
        assert_eq!(feb_leap.end_date(), date(2024, 2, 29));

        let feb = BudgetMonth::new(2023, 2).unwrap();
        assert_eq!(feb.end_date(), date(2023, 2, 28));

        let dec = BudgetMonth::new(2024, 12).unwrap();
        assert_eq!(dec.end_date(), date(2024, 12, 31));
    }

    #[test]
    fn test_containing() {
        let month = BudgetMonth::containing(date(2024, 6, 18));
        assert_eq!(month, BudgetMonth::new(2024, 6).unwrap());
        assert!(month.contains(date(2024, 6, 30)));
        assert!(!month.contains(date(2024, 7, 1)));
        assert!(!month.contains(date(2024, 5, 31)));
    }

    #[test]
    fn test_navigation() {
        let dec = BudgetMonth::new(2024, 12).unwrap();
        assert_eq!(dec.next(), BudgetMonth::new(2025, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);

        let jan = BudgetMonth::new(2024, 1).unwrap();
        assert_eq!(jan.next(), BudgetMonth::new(2024, 2).unwrap());
        assert_eq!(jan.prev(), BudgetMonth::new(2023, 12).unwrap());
    }

    #[test]
    fn test_day_clamps() {
        let feb = BudgetMonth::new(2023, 2).unwrap();
        assert_eq!(feb.day(15), date(2023, 2, 15));
        assert_eq!(feb.day(31), date(2023, 2, 28));
        assert_eq!(feb.day(0), date(2023, 2, 1));
    }

    #[test]
    fn test_parse_and_display() {
        let month = BudgetMonth::parse("2024-06").unwrap();
        assert_eq!(month.to_string(), "2024-06");
        assert!(BudgetMonth::parse("2024-13").is_err());
        assert!(BudgetMonth::parse("June").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let month = BudgetMonth::new(2025, 3).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2025-03\"");
        let back: BudgetMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, month);
    }
}
