//! Pixel geometry for the time-based day and week grids.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::event::Event;

pub const DEFAULT_PIXELS_PER_HOUR: f64 = 60.0;
pub const DEFAULT_MIN_EVENT_HEIGHT: f64 = 30.0;

/// Vertical placement of an event block inside a day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventPosition {
    pub top: f64,
    pub height: f64,
}

/// Scale of the hour grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    pub pixels_per_hour: f64,
    /// Floor that keeps very short events visible and clickable
    pub min_event_height: f64,
}

impl Default for GridMetrics {
    fn default() -> Self {
        GridMetrics {
            pixels_per_hour: DEFAULT_PIXELS_PER_HOUR,
            min_event_height: DEFAULT_MIN_EVENT_HEIGHT,
        }
    }
}

impl GridMetrics {
    /// Offset and height of `event` from its start and end clock times.
    ///
    /// Only time-of-day is considered: an event running past midnight is
    /// measured as if both ends were on the start day.
    pub fn position(&self, event: &Event) -> EventPosition {
        let start_minutes = minutes_of_day(event.start);
        let end_minutes = minutes_of_day(event.end);
        let duration = end_minutes - start_minutes;

        EventPosition {
            top: start_minutes / 60.0 * self.pixels_per_hour,
            height: (duration / 60.0 * self.pixels_per_hour).max(self.min_event_height),
        }
    }
}

fn minutes_of_day(t: NaiveDateTime) -> f64 {
    f64::from(t.hour() * 60 + t.minute())
}

/// Position on the default 60px-per-hour grid.
pub fn event_position(event: &Event) -> EventPosition {
    GridMetrics::default().position(event)
}

/// One hour row of the day/week grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub label: String,
    pub hour: u32,
}

/// The 24 hour rows, "00:00" through "23:00".
pub fn time_slots() -> Vec<TimeSlot> {
    (0..24)
        .map(|hour| TimeSlot {
            label: format!("{:02}:00", hour),
            hour,
        })
        .collect()
}

/// Format the clock part of a date-time (e.g. "09:05").
pub fn format_time(t: NaiveDateTime) -> String {
    t.format("%H:%M").to_string()
}

/// "09:00 - 10:00", or "All day" for all-day events.
pub fn time_range_label(event: &Event) -> String {
    if event.all_day {
        "All day".to_string()
    } else {
        format!("{} - {}", format_time(event.start), format_time(event.end))
    }
}
