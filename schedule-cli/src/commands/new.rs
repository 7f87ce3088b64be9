use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime};
use owo_colors::OwoColorize;
use schedule_core::config::ScheduleConfig;
use schedule_core::form::EventForm;
use schedule_core::view::ViewMode;
use schedule_core::{EventCategory, EventStore, ScheduleError};

use crate::commands::view;

pub struct NewArgs {
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub duration: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub all_day: bool,
}

pub fn run(store: &mut EventStore, config: &ScheduleConfig, args: NewArgs) -> Result<()> {
    let start = parse_datetime(&args.start)?;

    let end = if let Some(end_input) = &args.end {
        parse_datetime(end_input)?
    } else if let Some(dur_input) = &args.duration {
        apply_duration(start, dur_input)?
    } else {
        default_end(start)
    };

    let category = match &args.category {
        Some(name) => EventCategory::find_default(name)
            .ok_or_else(|| ScheduleError::UnknownCategory(name.clone()))?,
        None => EventCategory::default(),
    };

    let form = EventForm {
        title: args.title,
        description: args.description.unwrap_or_default(),
        start_date: start.format("%Y-%m-%d").to_string(),
        start_time: start.format("%H:%M").to_string(),
        end_date: end.format("%Y-%m-%d").to_string(),
        end_time: end.format("%H:%M").to_string(),
        category,
        all_day: args.all_day,
    };

    let event = form
        .submit(store, None)?
        .context("Event was not stored")?;

    println!("{} {}", "Created".green(), event.title);
    println!();

    view::run(store, config, ViewMode::Day, event.start_date(), false)
}

/// Parse "YYYY-MM-DDTHH:MM" (a space also works as the separator).
fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M"))
        .with_context(|| {
            format!(
                "Could not parse date/time: \"{}\". Expected YYYY-MM-DDTHH:MM",
                input
            )
        })
}

/// Apply a duration string to a start time.
fn apply_duration(start: NaiveDateTime, dur_input: &str) -> Result<NaiveDateTime> {
    let std_dur = humantime::parse_duration(dur_input)
        .with_context(|| format!("Could not parse duration: \"{}\"", dur_input))?;
    let chrono_dur = Duration::from_std(std_dur).context("Duration too large")?;

    start
        .checked_add_signed(chrono_dur)
        .context("Duration too large")
}

/// Default end time: one hour after the start.
fn default_end(start: NaiveDateTime) -> NaiveDateTime {
    start + Duration::hours(1)
}
