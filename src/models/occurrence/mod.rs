// Occurrence module
// One concrete, dated instance of a session on the calendar

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::date::CalendarDate;
use crate::models::session::SessionStatus;

/// A single dated instance of a session, ready for rendering.
///
/// Produced fresh on every expansion and never mutated afterwards. Display
/// fields (`group_name`, `trainer_name`, `formation_title`) are denormalized
/// from the owning group at expansion time so renames show up without stale
/// caches; `trainer_id` and `formation_id` are carried for filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Stable identity: `"{session_id}:{YYYY-MM-DD}"`.
    pub id: String,
    pub session_id: i64,
    pub group_id: i64,
    pub title: String,
    pub date: CalendarDate,
    /// Weekday of `date`, 0 = Sunday through 6 = Saturday.
    pub weekday: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: SessionStatus,
    pub group_name: String,
    pub trainer_id: Option<i64>,
    pub trainer_name: Option<String>,
    pub formation_id: Option<i64>,
    pub formation_title: Option<String>,
    pub location: Option<String>,
}
