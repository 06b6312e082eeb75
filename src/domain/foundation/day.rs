//! Calendar-day value object for the usage quota window.
//!
//! All rollover decisions compare against the current day in a single
//! fixed reference timezone (UTC), so every caller agrees on "today"
//! regardless of where the request originated.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Timestamp;

/// A calendar day in UTC, truncated to day granularity.
///
/// The quota window is always exactly the current calendar day, never a
/// rolling 24h window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsageDay(NaiveDate);

impl UsageDay {
    /// Returns today's date in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Creates a UsageDay from a NaiveDate.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a UsageDay from year/month/day, None if invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The day a timestamp falls on, in UTC.
    pub fn of(ts: &Timestamp) -> Self {
        Self(ts.as_datetime().date_naive())
    }

    /// Returns the inner NaiveDate.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// The following calendar day.
    pub fn next(&self) -> Self {
        Self(self.0.succ_opt().unwrap_or(self.0))
    }
}

impl fmt::Display for UsageDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.0.year(), self.0.month(), self.0.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_matches_utc_date() {
        let day = UsageDay::today();
        assert_eq!(day.as_date(), Utc::now().date_naive());
    }

    #[test]
    fn of_truncates_timestamp_to_day() {
        let ts = Timestamp::from_unix_secs(1705276800); // 2024-01-15T00:00:00Z
        let day = UsageDay::of(&ts);
        assert_eq!(day, UsageDay::from_ymd(2024, 1, 15).unwrap());

        let later = Timestamp::from_unix_secs(1705276800 + 23 * 3600);
        assert_eq!(UsageDay::of(&later), day);
    }

    #[test]
    fn next_advances_one_day() {
        let day = UsageDay::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(day.next(), UsageDay::from_ymd(2024, 2, 1).unwrap());
    }

    #[test]
    fn from_ymd_rejects_invalid_dates() {
        assert!(UsageDay::from_ymd(2024, 2, 30).is_none());
        assert!(UsageDay::from_ymd(2024, 13, 1).is_none());
    }

    #[test]
    fn displays_as_iso_date() {
        let day = UsageDay::from_ymd(2024, 3, 7).unwrap();
        assert_eq!(day.to_string(), "2024-03-07");
    }

    #[test]
    fn ordering_follows_calendar() {
        let earlier = UsageDay::from_ymd(2024, 1, 15).unwrap();
        let later = UsageDay::from_ymd(2024, 1, 16).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn serializes_to_iso_json() {
        let day = UsageDay::from_ymd(2024, 1, 15).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "\"2024-01-15\"");
    }
}
