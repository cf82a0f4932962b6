// Group module
// Canonical training-group record produced by the normalizer

use serde::{Deserialize, Serialize};

use crate::models::date::{CalendarDate, DatePeriod};

/// A training group as seen by the schedule engine.
///
/// Created from an upstream fetch, read-only afterwards. The formation period
/// bounds every session of the group; either bound may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub id: i64,
    pub name: String,
    pub trainer_id: Option<i64>,
    pub trainer_name: Option<String>,
    pub formation_id: Option<i64>,
    pub formation_title: Option<String>,
    pub period_start: Option<CalendarDate>,
    pub period_end: Option<CalendarDate>,
}

impl GroupRecord {
    /// The formation period when both bounds are present and ordered.
    /// A reversed pair (bad upstream edit) yields `None`.
    pub fn period(&self) -> Option<DatePeriod> {
        match (self.period_start, self.period_end) {
            (Some(start), Some(end)) => DatePeriod::new(start, end),
            _ => None,
        }
    }
}
