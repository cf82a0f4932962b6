// Occurrence expander
// Materializes session rules into concrete dated occurrences within a
// caller-supplied query range. Pure and idempotent: identical inputs always
// produce identical output, so callers may re-run it on every refresh.

use std::collections::HashMap;

use log::warn;

use crate::models::date::{CalendarDate, DatePeriod};
use crate::models::group::GroupRecord;
use crate::models::occurrence::Occurrence;
use crate::models::session::{Recurrence, SessionRule};
use crate::services::period::resolve_period;

mod identity;

pub use identity::occurrence_id;

/// Expand one session into its occurrences within `query`.
///
/// The scan walks the clamped range one calendar day at a time rather than
/// jumping week by week; day-at-a-time never skips boundary days at the
/// edges of the range.
pub fn expand_session(
    session: &SessionRule,
    group: &GroupRecord,
    query: &DatePeriod,
) -> Vec<Occurrence> {
    let Some(period) = resolve_period(session, group) else {
        return Vec::new();
    };
    let Some(range) = period.clamp_to(query) else {
        return Vec::new();
    };

    match &session.recurrence {
        None => Vec::new(),
        Some(Recurrence::SingleDate { date }) => {
            if range.contains(*date) {
                vec![make_occurrence(session, group, *date)]
            } else {
                Vec::new()
            }
        }
        Some(Recurrence::Weekly { weekdays }) => range
            .iter()
            .filter(|date| weekdays.contains(&date.weekday_index()))
            .map(|date| make_occurrence(session, group, date))
            .collect(),
    }
}

/// Expand every session against its owning group and return the combined
/// occurrence list, ordered by `(date, start_time, session_id)`.
///
/// Sessions referencing an unknown group are skipped with a warning; one bad
/// reference never aborts the rest of the schedule.
pub fn expand_schedule(
    sessions: &[SessionRule],
    groups: &[GroupRecord],
    query: &DatePeriod,
) -> Vec<Occurrence> {
    let by_id: HashMap<i64, &GroupRecord> = groups.iter().map(|g| (g.id, g)).collect();

    let mut occurrences = Vec::new();
    for session in sessions {
        match by_id.get(&session.group_id) {
            Some(group) => occurrences.extend(expand_session(session, group, query)),
            None => warn!(
                "session {}: unknown group {}, skipping",
                session.id, session.group_id
            ),
        }
    }

    occurrences.sort_by(|a, b| {
        (a.date, a.start_time, a.session_id).cmp(&(b.date, b.start_time, b.session_id))
    });
    occurrences
}

/// Build one occurrence, denormalizing display fields from the group at
/// expansion time so a renamed group is reflected without re-normalization.
fn make_occurrence(session: &SessionRule, group: &GroupRecord, date: CalendarDate) -> Occurrence {
    Occurrence {
        id: occurrence_id(session.id, date),
        session_id: session.id,
        group_id: group.id,
        title: session.title.clone(),
        date,
        weekday: date.weekday_index(),
        start_time: session.start_time,
        end_time: session.end_time,
        status: session.status,
        group_name: group.name.clone(),
        trainer_id: group.trainer_id,
        trainer_name: group.trainer_name.clone(),
        formation_id: group.formation_id,
        formation_title: group.formation_title.clone(),
        location: session.location.clone(),
    }
}
