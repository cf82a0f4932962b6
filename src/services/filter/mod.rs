// Filter engine
// AND-combination of optional criteria over an occurrence set, feeding the
// flat list view. Pure; output ordering never depends on input order.

use crate::models::date::DatePeriod;
use crate::models::occurrence::Occurrence;

/// Optional filter criteria. Absent fields impose no constraint; all present
/// fields must match (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub group_id: Option<i64>,
    pub trainer_id: Option<i64>,
    pub formation_id: Option<i64>,
    /// Restricts the occurrence date, inclusive on both ends.
    pub period: Option<DatePeriod>,
    /// Case-insensitive substring match against title, group name, trainer
    /// name, and location.
    pub text: Option<String>,
}

impl FilterCriteria {
    fn matches(&self, occurrence: &Occurrence) -> bool {
        if let Some(group_id) = self.group_id {
            if occurrence.group_id != group_id {
                return false;
            }
        }
        if let Some(trainer_id) = self.trainer_id {
            if occurrence.trainer_id != Some(trainer_id) {
                return false;
            }
        }
        if let Some(formation_id) = self.formation_id {
            if occurrence.formation_id != Some(formation_id) {
                return false;
            }
        }
        if let Some(period) = self.period {
            if !period.contains(occurrence.date) {
                return false;
            }
        }
        if let Some(ref text) = self.text {
            if !matches_text(occurrence, text) {
                return false;
            }
        }
        true
    }
}

fn matches_text(occurrence: &Occurrence, text: &str) -> bool {
    let needle = text.to_lowercase();
    let haystacks = [
        Some(occurrence.title.as_str()),
        Some(occurrence.group_name.as_str()),
        occurrence.trainer_name.as_deref(),
        occurrence.location.as_deref(),
    ];
    haystacks
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Apply `criteria` and return the matches sorted ascending by
/// `(date, start_time)`, ties broken by `session_id`.
pub fn filter_occurrences(occurrences: &[Occurrence], criteria: &FilterCriteria) -> Vec<Occurrence> {
    let mut matched: Vec<Occurrence> = occurrences
        .iter()
        .filter(|occurrence| criteria.matches(occurrence))
        .cloned()
        .collect();
    matched.sort_by(|a, b| {
        (a.date, a.start_time, a.session_id).cmp(&(b.date, b.start_time, b.session_id))
    });
    matched
}
