// Calendar date module
// Timezone-free (year, month, day) value type and inclusive date periods.
// All arithmetic is calendar-based; no instant or epoch conversion is
// involved anywhere, so results never depend on the host timezone.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// A plain Gregorian calendar date with no attached timezone.
///
/// Ordered by `(year, month, day)`, hashable so it can key a per-day index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from its components, validating the Gregorian calendar.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a canonical `YYYY-MM-DD` string.
    ///
    /// Longer ISO-8601 timestamps (e.g. `2025-01-06T00:00:00.000Z`) are
    /// accepted by taking their leading date part verbatim, with no timezone
    /// adjustment.
    pub fn parse_iso(s: &str) -> Result<Self, ScheduleError> {
        let trimmed = s.trim();
        let date_part = if trimmed.len() > 10 {
            trimmed.get(..10).unwrap_or(trimmed)
        } else {
            trimmed
        };
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ScheduleError::InvalidDate(s.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Weekday as an index with 0 = Sunday through 6 = Saturday.
    pub fn weekday_index(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// The date `n` days later (or earlier for negative `n`).
    pub fn add_days(&self, n: i64) -> Self {
        Self(self.0 + Duration::days(n))
    }

    /// The next calendar day.
    pub fn succ(&self) -> Self {
        self.add_days(1)
    }

    /// Number of days in the given month.
    pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some((next_first - first).num_days() as u32)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

/// An inclusive date range. Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePeriod {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl DatePeriod {
    /// Create a period; `None` if the bounds are reversed.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// The query range covering one whole calendar month.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = CalendarDate::new(year, month, 1)?;
        let end = CalendarDate::new(year, month, CalendarDate::days_in_month(year, month)?)?;
        Some(Self { start, end })
    }

    /// Whether `date` lies inside the period, both ends inclusive.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Intersection of two periods: `[max(starts), min(ends)]`.
    /// `None` when the ranges do not overlap.
    pub fn intersect(&self, other: &DatePeriod) -> Option<DatePeriod> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        DatePeriod::new(start, end)
    }

    /// Iterate every date in the period, one calendar day at a time.
    pub fn iter(&self) -> DayIter {
        DayIter {
            next: Some(self.start),
            end: self.end,
        }
    }
}

/// Day-by-day iterator over an inclusive period.
pub struct DayIter {
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl Iterator for DayIter {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<CalendarDate> {
        let current = self.next?;
        self.next = if current < self.end {
            Some(current.succ())
        } else {
            None
        };
        Some(current)
    }
}
