// Integration tests for the full pipeline:
// raw JSON -> normalize -> period resolution -> expansion -> index / filter

mod fixtures;

use formation_calendar::models::date::{CalendarDate, DatePeriod};
use formation_calendar::services::calendar::CalendarIndex;
use formation_calendar::services::filter::{filter_occurrences, FilterCriteria};
use formation_calendar::services::normalize::{normalize_groups, normalize_sessions};
use formation_calendar::services::schedule::expand_schedule;

use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

fn pipeline(query: DatePeriod) -> Vec<formation_calendar::models::occurrence::Occurrence> {
    let groups = normalize_groups(&fixtures::raw_groups()).unwrap();
    let sessions = normalize_sessions(&fixtures::raw_sessions()).unwrap();
    expand_schedule(&sessions, &groups, &query)
}

#[test]
fn test_weekly_session_fills_january_mondays_and_wednesdays() {
    let january = DatePeriod::month(2025, 1).unwrap();
    let occurrences = pipeline(january);

    let core: Vec<_> = occurrences.iter().filter(|o| o.session_id == 10).collect();
    let days: Vec<u32> = core.iter().map(|o| o.date.day()).collect();
    // Group period starts Monday Jan 6; every Monday and Wednesday after it.
    assert_eq!(days, vec![6, 8, 13, 15, 20, 22, 27, 29]);
    assert!(core.iter().all(|o| o.weekday == 1 || o.weekday == 3));
    assert!(core.iter().all(|o| o.group_name == "Rust beginners"));
}

#[test]
fn test_single_date_session_appears_exactly_once() {
    let february = DatePeriod::month(2025, 2).unwrap();
    let occurrences = pipeline(february);

    let exams: Vec<_> = occurrences.iter().filter(|o| o.session_id == 12).collect();
    assert_eq!(exams.len(), 1);
    assert_eq!(exams[0].date, date(2025, 2, 14));
    assert_eq!(exams[0].id, "12:2025-02-14");
}

#[test]
fn test_session_override_narrows_group_period() {
    let january = DatePeriod::month(2025, 1).unwrap();
    let occurrences = pipeline(january);

    // Fridays, but the session override ends Jan 15.
    let fridays: Vec<u32> = occurrences
        .iter()
        .filter(|o| o.session_id == 11)
        .map(|o| o.date.day())
        .collect();
    assert_eq!(fridays, vec![3, 10]);
}

#[test]
fn test_reversed_group_period_contributes_nothing() {
    for month in 1..=5 {
        let query = DatePeriod::month(2025, month).unwrap();
        let occurrences = pipeline(query);
        assert!(
            occurrences.iter().all(|o| o.session_id != 13),
            "ghost session leaked into month {month}"
        );
    }
}

#[test]
fn test_all_ids_unique_within_an_expansion() {
    let january = DatePeriod::month(2025, 1).unwrap();
    let occurrences = pipeline(january);

    let mut ids: Vec<&str> = occurrences.iter().map(|o| o.id.as_str()).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn test_expansion_is_idempotent_across_calls() {
    let march = DatePeriod::month(2025, 3).unwrap();
    assert_eq!(pipeline(march), pipeline(march));
}

#[test]
fn test_boundary_inclusivity_at_period_end() {
    // The group period ends Friday Mar 28; the last Wednesday is Mar 26.
    let march = DatePeriod::month(2025, 3).unwrap();
    let occurrences = pipeline(march);
    let core_days: Vec<u32> = occurrences
        .iter()
        .filter(|o| o.session_id == 10)
        .map(|o| o.date.day())
        .collect();
    assert!(core_days.contains(&26));
    assert!(!core_days.contains(&31), "Mar 31 is past the group period");

    let april = DatePeriod::month(2025, 4).unwrap();
    assert!(pipeline(april)
        .iter()
        .all(|o| o.session_id != 10), "no core sessions after the period end");
}

#[test]
fn test_month_index_supports_day_lookups() {
    let january = DatePeriod::month(2025, 1).unwrap();
    let occurrences = pipeline(january);
    let index = CalendarIndex::build(&occurrences);

    // Jan 6: core course only. Jan 3: Friday workshop only.
    assert_eq!(index.occurrences_on(date(2025, 1, 6)).len(), 1);
    assert_eq!(index.occurrences_on(date(2025, 1, 3)).len(), 1);
    assert!(index.occurrences_on(date(2025, 1, 7)).is_empty());
}

#[test]
fn test_filter_by_group_and_text() {
    let january = DatePeriod::month(2025, 1).unwrap();
    let occurrences = pipeline(january);

    let criteria = FilterCriteria {
        group_id: Some(8),
        text: Some("workshop".to_string()),
        ..Default::default()
    };
    let matched = filter_occurrences(&occurrences, &criteria);
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|o| o.group_id == 8));
    assert!(matched
        .iter()
        .all(|o| o.title.to_lowercase().contains("workshop")));
}

#[test]
fn test_filter_by_explicit_period() {
    let q1 = DatePeriod::new(date(2025, 1, 1), date(2025, 3, 31)).unwrap();
    let occurrences = pipeline(q1);

    let criteria = FilterCriteria {
        period: DatePeriod::new(date(2025, 2, 1), date(2025, 2, 28)),
        ..Default::default()
    };
    let matched = filter_occurrences(&occurrences, &criteria);
    assert!(!matched.is_empty());
    assert!(matched
        .iter()
        .all(|o| o.date >= date(2025, 2, 1) && o.date <= date(2025, 2, 28)));
}

#[test]
fn test_renamed_group_shows_up_on_next_expansion() {
    let january = DatePeriod::month(2025, 1).unwrap();
    let mut groups = normalize_groups(&fixtures::raw_groups()).unwrap();
    let sessions = normalize_sessions(&fixtures::raw_sessions()).unwrap();

    let before = expand_schedule(&sessions, &groups, &january);
    assert!(before.iter().any(|o| o.group_name == "Rust beginners"));

    groups[0].name = "Rust intermediate".to_string();
    let after = expand_schedule(&sessions, &groups, &january);
    assert!(after.iter().any(|o| o.group_name == "Rust intermediate"));
    assert!(after.iter().all(|o| o.group_name != "Rust beginners"));
}

#[test]
fn test_output_is_ordered_by_date_then_time() {
    let january = DatePeriod::month(2025, 1).unwrap();
    let occurrences = pipeline(january);

    let keys: Vec<_> = occurrences
        .iter()
        .map(|o| (o.date, o.start_time, o.session_id))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}
