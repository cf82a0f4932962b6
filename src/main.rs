// Formation Calendar demo binary
// Loads raw group and session JSON, runs the pipeline for one month, and
// prints the month summary plus the ordered occurrence list.
//
// Usage: formation-calendar <groups.json> <sessions.json> [YYYY-MM]

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local};

use formation_calendar::models::date::DatePeriod;
use formation_calendar::services::calendar::CalendarIndex;
use formation_calendar::services::normalize::{normalize_groups, normalize_sessions};
use formation_calendar::services::schedule::expand_schedule;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (groups_path, sessions_path) = match args.as_slice() {
        [g, s] | [g, s, _] => (g, s),
        _ => bail!("usage: formation-calendar <groups.json> <sessions.json> [YYYY-MM]"),
    };

    let query = match args.get(2) {
        Some(month_arg) => parse_month(month_arg)?,
        None => {
            let today = Local::now().date_naive();
            DatePeriod::month(today.year(), today.month())
                .context("could not build the current month range")?
        }
    };

    let groups_json: serde_json::Value = fs::read_to_string(groups_path)
        .with_context(|| format!("failed to read {groups_path}"))?
        .parse()
        .with_context(|| format!("{groups_path} is not valid JSON"))?;
    let sessions_json: serde_json::Value = fs::read_to_string(sessions_path)
        .with_context(|| format!("failed to read {sessions_path}"))?
        .parse()
        .with_context(|| format!("{sessions_path} is not valid JSON"))?;

    let groups = normalize_groups(&groups_json).context("normalizing groups")?;
    let sessions = normalize_sessions(&sessions_json).context("normalizing sessions")?;
    log::info!(
        "loaded {} groups and {} sessions",
        groups.len(),
        sessions.len()
    );

    let occurrences = expand_schedule(&sessions, &groups, &query);
    let index = CalendarIndex::build(&occurrences);

    println!(
        "{} occurrences between {} and {}",
        occurrences.len(),
        query.start,
        query.end
    );
    println!();

    for day in query.iter() {
        let on_day = index.occurrences_on(day);
        if !on_day.is_empty() {
            println!("{day}  ({} session{})", on_day.len(), plural(on_day.len()));
        }
    }
    println!();

    for occurrence in &occurrences {
        println!(
            "{} {}-{}  [{}] {} - {}{}",
            occurrence.date,
            occurrence.start_time.format("%H:%M"),
            occurrence.end_time.format("%H:%M"),
            occurrence.status,
            occurrence.group_name,
            occurrence.title,
            occurrence
                .location
                .as_deref()
                .map(|l| format!(" ({l})"))
                .unwrap_or_default(),
        );
    }

    Ok(())
}

fn parse_month(arg: &str) -> Result<DatePeriod> {
    let (year, month) = arg
        .split_once('-')
        .with_context(|| format!("expected YYYY-MM, got '{arg}'"))?;
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in '{arg}'"))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("invalid month in '{arg}'"))?;
    DatePeriod::month(year, month).with_context(|| format!("'{arg}' is not a valid month"))
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
