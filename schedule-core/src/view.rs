//! Header navigation and the month grid summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::days::{self, add_days, add_months, add_weeks, month_days, week_days};
use crate::error::{ScheduleError, ScheduleResult};
use crate::event::Event;
use crate::query::events_for_day;

/// Column headers of the week and month grids.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// How many events a month cell lists before collapsing into "+N more".
pub const DEFAULT_MONTH_CELL_EVENTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Day, ViewMode::Week, ViewMode::Month];

    /// The date one view-length before `date`.
    pub fn previous(self, date: NaiveDate) -> ScheduleResult<NaiveDate> {
        self.step(date, -1)
    }

    /// The date one view-length after `date`.
    pub fn next(self, date: NaiveDate) -> ScheduleResult<NaiveDate> {
        self.step(date, 1)
    }

    fn step(self, date: NaiveDate, direction: i32) -> ScheduleResult<NaiveDate> {
        match self {
            ViewMode::Day => add_days(date, i64::from(direction)),
            ViewMode::Week => add_weeks(date, i64::from(direction)),
            ViewMode::Month => add_months(date, direction),
        }
    }

    /// Dates shown by this view for `date`.
    pub fn visible_days(self, date: NaiveDate) -> ScheduleResult<Vec<NaiveDate>> {
        match self {
            ViewMode::Day => Ok(vec![date]),
            ViewMode::Week => week_days(date),
            ViewMode::Month => month_days(date),
        }
    }

    /// Header title, e.g. "Monday, January 20, 2025", "Jan 19 - Jan 25, 2025"
    /// or "January 2025".
    pub fn header_title(self, date: NaiveDate) -> ScheduleResult<String> {
        let title = match self {
            ViewMode::Day => date.format("%A, %B %-d, %Y").to_string(),
            ViewMode::Week => {
                let week = week_days(date)?;
                let (start, end) = (week[0], week[week.len() - 1]);
                format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
            }
            ViewMode::Month => date.format("%B %Y").to_string(),
        };
        Ok(title)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ViewMode {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            _ => Err(ScheduleError::UnknownView(s.to_string())),
        }
    }
}

/// One cell of the 6x7 month grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from adjacent months
    pub in_current_month: bool,
    pub is_today: bool,
    /// Earliest events of the day, at most the cell limit
    pub events: Vec<Event>,
    /// Events that did not fit ("+N more")
    pub overflow: usize,
}

impl MonthCell {
    /// Whether the day has any events, listed or collapsed.
    pub fn has_events(&self) -> bool {
        !self.events.is_empty() || self.overflow > 0
    }
}

/// Build all 42 cells of the month containing `date`.
pub fn month_grid(
    events: &[Event],
    date: NaiveDate,
    limit: usize,
) -> ScheduleResult<Vec<MonthCell>> {
    let cells = month_days(date)?
        .into_iter()
        .map(|day| {
            let mut day_events = events_for_day(events, day);
            let overflow = day_events.len().saturating_sub(limit);
            day_events.truncate(limit);

            MonthCell {
                date: day,
                in_current_month: days::is_current_month(day, date),
                is_today: days::is_today(day),
                events: day_events,
                overflow,
            }
        })
        .collect();
    Ok(cells)
}
