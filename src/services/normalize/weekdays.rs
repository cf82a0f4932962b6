use std::collections::BTreeSet;

use log::warn;
use serde_json::Value;

/// Parse one upstream weekday token into an index (0 = Sunday .. 6 = Saturday).
///
/// Accepts numeric indices, English names and three-letter abbreviations, and
/// French names (the upstream UI is French-speaking).
pub(super) fn weekday_from_token(token: &str) -> Option<u32> {
    let normalized = token.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "0" | "sunday" | "sun" | "dimanche" => Some(0),
        "1" | "monday" | "mon" | "lundi" => Some(1),
        "2" | "tuesday" | "tue" | "mardi" => Some(2),
        "3" | "wednesday" | "wed" | "mercredi" => Some(3),
        "4" | "thursday" | "thu" | "jeudi" => Some(4),
        "5" | "friday" | "fri" | "vendredi" => Some(5),
        "6" | "saturday" | "sat" | "samedi" => Some(6),
        _ => None,
    }
}

/// Extract the weekday set from an upstream `days` field, which arrives
/// either as an array of tokens or as one comma-joined string.
///
/// Unrecognized tokens are dropped with a warning; they never fail the
/// record. An empty result means the session has no usable weekly recurrence.
pub(super) fn parse_weekday_set(value: &Value, session_id: i64) -> BTreeSet<u32> {
    let tokens: Vec<String> = match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Value::String(joined) => joined
            .split(',')
            .map(|s| s.to_string())
            .filter(|s| !s.trim().is_empty())
            .collect(),
        _ => Vec::new(),
    };

    let mut weekdays = BTreeSet::new();
    for token in tokens {
        match weekday_from_token(&token) {
            Some(index) => {
                weekdays.insert(index);
            }
            None => warn!(
                "session {}: dropping unknown weekday token '{}'",
                session_id,
                token.trim()
            ),
        }
    }
    weekdays
}
