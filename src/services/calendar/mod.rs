// Calendar aggregator
// Indexes occurrences by date for O(1) day-cell lookups in a month grid.
// Always rebuilt from scratch when the occurrence set changes; an idempotent
// rebuild is cheaper to reason about than incremental updates when the query
// range moves on every navigation.

use std::collections::HashMap;

use crate::models::date::CalendarDate;
use crate::models::occurrence::Occurrence;

/// Per-day index over a set of occurrences.
#[derive(Debug, Clone, Default)]
pub struct CalendarIndex {
    by_date: HashMap<CalendarDate, Vec<Occurrence>>,
}

impl CalendarIndex {
    /// Build the index. Each day's bucket is ordered by
    /// `(start_time, session_id)` for deterministic rendering.
    pub fn build(occurrences: &[Occurrence]) -> Self {
        let mut by_date: HashMap<CalendarDate, Vec<Occurrence>> = HashMap::new();
        for occurrence in occurrences {
            by_date
                .entry(occurrence.date)
                .or_default()
                .push(occurrence.clone());
        }
        for bucket in by_date.values_mut() {
            bucket.sort_by(|a, b| (a.start_time, a.session_id).cmp(&(b.start_time, b.session_id)));
        }
        Self { by_date }
    }

    /// Occurrences on the given day; empty when there are none.
    pub fn occurrences_on(&self, date: CalendarDate) -> &[Occurrence] {
        self.by_date.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct days holding at least one occurrence.
    pub fn day_count(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
