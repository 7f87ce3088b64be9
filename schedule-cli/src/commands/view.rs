use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use schedule_core::config::ScheduleConfig;
use schedule_core::days::is_today;
use schedule_core::layout::{EventPosition, GridMetrics};
use schedule_core::view::{MonthCell, ViewMode, WEEKDAY_LABELS, month_grid};
use schedule_core::{Event, EventStore};
use serde::Serialize;

use crate::render::{Render, paint, pluralize};

#[derive(Serialize)]
struct ViewJson {
    mode: ViewMode,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    days: Option<Vec<DayJson>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cells: Option<Vec<MonthCell>>,
}

#[derive(Serialize)]
struct DayJson {
    date: NaiveDate,
    events: Vec<PositionedEvent>,
}

#[derive(Serialize)]
struct PositionedEvent {
    #[serde(flatten)]
    event: Event,
    position: EventPosition,
}

pub fn run(
    store: &EventStore,
    config: &ScheduleConfig,
    mode: ViewMode,
    date: NaiveDate,
    json: bool,
) -> Result<()> {
    if json {
        let view = view_json(store, config, mode, date)?;
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", mode.header_title(date)?.bold());
    println!();

    match mode {
        ViewMode::Day => print_day(store, &config.grid_metrics(), date),
        ViewMode::Week => print_week(store, date)?,
        ViewMode::Month => print_month(store, config, date)?,
    }

    Ok(())
}

fn view_json(
    store: &EventStore,
    config: &ScheduleConfig,
    mode: ViewMode,
    date: NaiveDate,
) -> Result<ViewJson> {
    let metrics = config.grid_metrics();
    let (days, cells) = match mode {
        ViewMode::Month => {
            let cells = month_grid(store.list(), date, config.month_cell_events)?;
            (None, Some(cells))
        }
        _ => {
            let days = mode
                .visible_days(date)?
                .into_iter()
                .map(|day| DayJson {
                    date: day,
                    events: store
                        .events_for_day(day)
                        .into_iter()
                        .map(|event| PositionedEvent {
                            position: metrics.position(&event),
                            event,
                        })
                        .collect(),
                })
                .collect();
            (Some(days), None)
        }
    };

    Ok(ViewJson {
        mode,
        title: mode.header_title(date)?,
        days,
        cells,
    })
}

fn print_day(store: &EventStore, metrics: &GridMetrics, date: NaiveDate) {
    let events = store.events_for_day(date);
    if events.is_empty() {
        println!("{}", "No events".dimmed());
        return;
    }

    for event in &events {
        let pos = metrics.position(event);
        let geometry = format!("(top {}px, {}px)", pos.top, pos.height);
        println!("{}  {}", event.render(), geometry.dimmed());
    }
}

fn print_week(store: &EventStore, date: NaiveDate) -> Result<()> {
    for day in ViewMode::Week.visible_days(date)? {
        let label = day.format("%a %-d").to_string();
        if is_today(day) {
            println!("{}", label.bold().underline());
        } else {
            println!("{}", label.bold());
        }

        let events = store.events_for_day(day);
        if events.is_empty() {
            println!("  {}", "-".dimmed());
        }
        for event in &events {
            println!("  {}", event.render());
        }
    }
    Ok(())
}

fn print_month(store: &EventStore, config: &ScheduleConfig, date: NaiveDate) -> Result<()> {
    let cells = month_grid(store.list(), date, config.month_cell_events)?;

    let header: String = WEEKDAY_LABELS.iter().map(|d| format!("{:>4} ", d)).collect();
    println!("{}", header.dimmed());
    for week in cells.chunks(7) {
        let row: String = week.iter().map(|cell| cell.render()).collect();
        println!("{}", row);
    }

    let busy = busy_days(&cells);
    if busy.is_empty() {
        return Ok(());
    }

    println!();
    for cell in busy {
        let titles: Vec<String> = cell
            .events
            .iter()
            .map(|e| paint(&e.title, &e.color))
            .collect();
        let mut line = format!("{}  {}", cell.date.format("%b %-d"), titles.join(", "));
        if cell.overflow > 0 {
            let more = format!("+{} more {}", cell.overflow, pluralize("event", cell.overflow));
            line = format!("{} {}", line, more.dimmed());
        }
        println!("{}", line);
    }
    Ok(())
}

/// Days of the shown month that have events, listed or collapsed.
fn busy_days(cells: &[MonthCell]) -> Vec<&MonthCell> {
    cells
        .iter()
        .filter(|c| c.in_current_month && c.has_events())
        .collect()
}
