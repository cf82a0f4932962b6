use crate::models::date::CalendarDate;

/// Stable occurrence identity derived from `(session_id, date)`.
///
/// The same session and date always yield the same id, and no two distinct
/// pairs can collide: the separator never appears in either component.
pub fn occurrence_id(session_id: i64, date: CalendarDate) -> String {
    format!("{session_id}:{date}")
}
