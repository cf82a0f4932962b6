// Source normalizer
// Maps heterogeneous raw group/session JSON into the canonical record types.
// Absorbs every upstream field-naming convention here so the rest of the
// pipeline sees exactly one shape. Pure: no I/O, inputs are never mutated.
//
// Fault isolation: a malformed individual record is logged and skipped; only
// a top-level value that is not an array is a hard error.

use chrono::NaiveTime;
use log::{debug, warn};
use serde_json::Value;

use crate::error::{Result, ScheduleError};
use crate::models::date::CalendarDate;
use crate::models::group::GroupRecord;
use crate::models::session::{Recurrence, SessionRule, SessionStatus};

mod weekdays;

use weekdays::parse_weekday_set;

/// Normalize a raw array of group records, skipping malformed entries.
pub fn normalize_groups(raw: &Value) -> Result<Vec<GroupRecord>> {
    let items = raw
        .as_array()
        .ok_or(ScheduleError::InvalidInput("group"))?;

    let mut groups = Vec::with_capacity(items.len());
    for item in items {
        match normalize_group(item) {
            Ok(group) => groups.push(group),
            Err(err) => warn!("skipping group record: {err}"),
        }
    }
    Ok(groups)
}

/// Normalize a raw array of session records, skipping malformed entries.
pub fn normalize_sessions(raw: &Value) -> Result<Vec<SessionRule>> {
    let items = raw
        .as_array()
        .ok_or(ScheduleError::InvalidInput("session"))?;

    let mut sessions = Vec::with_capacity(items.len());
    for item in items {
        match normalize_session(item) {
            Ok(session) => sessions.push(session),
            Err(err) => warn!("skipping session record: {err}"),
        }
    }
    Ok(sessions)
}

/// Normalize one raw group record.
///
/// The primary `startDate`/`endDate` pair is authoritative for the formation
/// period; `formationStartDate`/`formationEndDate` are a fallback for older
/// upstream payloads and are only consulted when the primary names are absent.
pub fn normalize_group(raw: &Value) -> Result<GroupRecord> {
    let id = int_field(raw, &["id", "_id", "groupId"]).ok_or(ScheduleError::MissingField("id"))?;

    Ok(GroupRecord {
        id,
        name: str_field(raw, &["name", "groupName", "title"])
            .unwrap_or_default()
            .to_string(),
        trainer_id: int_field(raw, &["trainerId", "trainer_id"]),
        trainer_name: str_field(raw, &["trainerName", "trainer"]).map(str::to_string),
        formation_id: int_field(raw, &["formationId", "formation_id"]),
        formation_title: str_field(raw, &["formationTitle", "formation"]).map(str::to_string),
        period_start: date_field(raw, &["startDate", "periodStart", "formationStartDate"])?,
        period_end: date_field(raw, &["endDate", "periodEnd", "formationEndDate"])?,
    })
}

/// Normalize one raw session record.
pub fn normalize_session(raw: &Value) -> Result<SessionRule> {
    let id = int_field(raw, &["id", "_id"]).ok_or(ScheduleError::MissingField("id"))?;
    let group_id = int_field(raw, &["groupId", "group_id", "group"])
        .ok_or(ScheduleError::MissingField("groupId"))?;

    let status = match str_field(raw, &["status"]) {
        Some(token) => SessionStatus::from_token(token).unwrap_or_else(|| {
            warn!("session {id}: unknown status '{token}', defaulting to active");
            SessionStatus::Active
        }),
        None => SessionStatus::Active,
    };

    let start_time = time_field(raw, &["startTime", "start_time"])?;
    let end_time = time_field(raw, &["endTime", "end_time"])?;
    if start_time >= end_time {
        return Err(ScheduleError::InvalidTime(format!(
            "session {id}: start {start_time} is not before end {end_time}"
        )));
    }

    let single_date = date_field(raw, &["date", "sessionDate"])?;
    let weekday_value = field(raw, &["days", "weekdays", "weekDays"]);

    let recurrence = match weekday_value {
        Some(value) => {
            let set = parse_weekday_set(value, id);
            if !set.is_empty() {
                if single_date.is_some() {
                    warn!("session {id}: has both weekdays and a single date, keeping weekly");
                }
                Some(Recurrence::Weekly { weekdays: set })
            } else if let Some(date) = single_date {
                Some(Recurrence::SingleDate { date })
            } else {
                debug!("session {id}: no usable recurrence, will contribute no occurrences");
                None
            }
        }
        None => single_date.map(|date| Recurrence::SingleDate { date }),
    };

    Ok(SessionRule {
        id,
        title: str_field(raw, &["title", "name"])
            .unwrap_or_default()
            .to_string(),
        group_id,
        status,
        recurrence,
        start_time,
        end_time,
        period_override_start: date_field(raw, &["startDate", "periodStart"])?,
        period_override_end: date_field(raw, &["endDate", "periodEnd"])?,
        location: str_field(raw, &["location", "room"]).map(str::to_string),
    })
}

/// First present, non-null field among the candidate names.
fn field<'a>(raw: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| raw.get(name))
        .find(|value| !value.is_null())
}

fn str_field<'a>(raw: &'a Value, names: &[&str]) -> Option<&'a str> {
    field(raw, names).and_then(Value::as_str)
}

/// Integer field; numeric-string ids ("7") are accepted as well.
fn int_field(raw: &Value, names: &[&str]) -> Option<i64> {
    let value = field(raw, names)?;
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

fn date_field(raw: &Value, names: &[&str]) -> Result<Option<CalendarDate>> {
    match str_field(raw, names) {
        Some(s) if !s.trim().is_empty() => CalendarDate::parse_iso(s).map(Some),
        _ => Ok(None),
    }
}

fn time_field(raw: &Value, names: &[&str]) -> Result<NaiveTime> {
    let s = str_field(raw, names).ok_or(ScheduleError::MissingField("startTime/endTime"))?;
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| ScheduleError::InvalidTime(s.to_string()))
}
