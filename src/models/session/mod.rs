// Session module
// Canonical recurring-session rule produced by the normalizer

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::date::CalendarDate;

/// Lifecycle status of a training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
    Cancelled,
    Pending,
}

impl SessionStatus {
    /// Parse an upstream status token. Returns `None` for unknown tokens so
    /// the normalizer can warn and fall back to a default.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "active" | "ongoing" | "en cours" => Some(Self::Active),
            "completed" | "finished" | "terminee" | "terminée" => Some(Self::Completed),
            "cancelled" | "canceled" | "annulee" | "annulée" => Some(Self::Cancelled),
            "pending" | "upcoming" | "en attente" => Some(Self::Pending),
            _ => None,
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Pending => "pending",
        };
        write!(f, "{label}")
    }
}

/// How a session repeats on the calendar.
///
/// Weekday indices use 0 = Sunday through 6 = Saturday, matching
/// [`CalendarDate::weekday_index`](crate::models::date::CalendarDate::weekday_index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recurrence {
    /// Repeats every week on each weekday in the (non-empty) set.
    Weekly { weekdays: BTreeSet<u32> },
    /// Happens exactly once, on the given date.
    SingleDate { date: CalendarDate },
}

/// A session rule: what repeats, when, and for whom.
///
/// `recurrence` is `None` when the upstream record carried neither weekdays
/// nor a single date; such a session contributes no occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRule {
    pub id: i64,
    pub title: String,
    pub group_id: i64,
    pub status: SessionStatus,
    pub recurrence: Option<Recurrence>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub period_override_start: Option<CalendarDate>,
    pub period_override_end: Option<CalendarDate>,
    pub location: Option<String>,
}
