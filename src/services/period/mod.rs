// Period resolver
// Intersects a group's formation period with a session's override period to
// produce the effective validity window for expansion.

use crate::models::date::{CalendarDate, DatePeriod};
use crate::models::group::GroupRecord;
use crate::models::session::SessionRule;

/// The resolved validity window of a session. Either bound may be absent,
/// in which case the query range supplies it at expansion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectivePeriod {
    pub start: Option<CalendarDate>,
    pub end: Option<CalendarDate>,
}

impl EffectivePeriod {
    /// A period with no bounds at all.
    pub fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Intersect with a concrete query range, yielding the bounded range the
    /// expander actually scans. `None` when the intersection is empty.
    pub fn clamp_to(&self, range: &DatePeriod) -> Option<DatePeriod> {
        let start = self.start.map_or(range.start, |s| s.max(range.start));
        let end = self.end.map_or(range.end, |e| e.min(range.end));
        DatePeriod::new(start, end)
    }
}

/// Resolve the effective period for `session` within `group`.
///
/// Starts from the group's formation period and narrows each bound
/// independently with the session override: the later of the starts, the
/// earlier of the ends. A session may override only one bound.
///
/// Returns `None` when the intersection is empty (start after end) — an
/// expected case, e.g. a cancelled group or a bad upstream edit — which the
/// expander turns into zero occurrences, never an error.
pub fn resolve_period(session: &SessionRule, group: &GroupRecord) -> Option<EffectivePeriod> {
    let start = narrow(group.period_start, session.period_override_start, CalendarDate::max);
    let end = narrow(group.period_end, session.period_override_end, CalendarDate::min);

    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            return None;
        }
    }

    Some(EffectivePeriod { start, end })
}

fn narrow(
    group_bound: Option<CalendarDate>,
    override_bound: Option<CalendarDate>,
    pick: fn(CalendarDate, CalendarDate) -> CalendarDate,
) -> Option<CalendarDate> {
    match (group_bound, override_bound) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (bound, None) => bound,
        (None, bound) => bound,
    }
}
