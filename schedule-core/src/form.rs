//! The create/edit form payload.
//!
//! The form collects raw strings; `into_draft` turns them into an
//! `EventDraft` the store accepts. An end before the start is accepted as
//! typed.

use chrono::NaiveDate;

use crate::days::{parse_date, parse_time};
use crate::error::{ScheduleError, ScheduleResult};
use crate::event::{Event, EventCategory, EventDraft, EventUpdate};
use crate::store::EventStore;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    /// YYYY-MM-DD
    pub start_date: String,
    /// HH:MM
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub category: EventCategory,
    pub all_day: bool,
}

impl EventForm {
    /// Defaults for a new event created from an hour slot: one hour long,
    /// starting on the hour. The 23:00 slot ends at midnight the next day.
    pub fn for_slot(date: NaiveDate, hour: u32) -> Self {
        let hour = hour.min(23);
        let (end_date, end_hour) = if hour == 23 {
            (date.succ_opt().unwrap_or(date), 0)
        } else {
            (date, hour + 1)
        };

        EventForm {
            start_date: date.format(DATE_FORMAT).to_string(),
            start_time: format!("{:02}:00", hour),
            end_date: end_date.format(DATE_FORMAT).to_string(),
            end_time: format!("{:02}:00", end_hour),
            ..Self::default()
        }
    }

    /// Prefill the form with an existing event for editing.
    pub fn from_event(event: &Event) -> Self {
        EventForm {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            start_date: event.start.format(DATE_FORMAT).to_string(),
            start_time: event.start.format(TIME_FORMAT).to_string(),
            end_date: event.end.format(DATE_FORMAT).to_string(),
            end_time: event.end.format(TIME_FORMAT).to_string(),
            category: event.category.clone(),
            all_day: event.all_day,
        }
    }

    pub fn into_draft(self) -> ScheduleResult<EventDraft> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }

        let start = parse_date(&self.start_date)?.and_time(parse_time(&self.start_time)?);
        let end = parse_date(&self.end_date)?.and_time(parse_time(&self.end_time)?);

        let mut draft = EventDraft::new(title, start, end, self.category).all_day(self.all_day);
        let description = self.description.trim();
        if !description.is_empty() {
            draft = draft.with_description(description);
        }
        Ok(draft)
    }

    /// Save the form: add a new event, or replace the fields of the event
    /// being edited.
    ///
    /// Returns the stored event, or `None` when the edited event no longer
    /// exists.
    pub fn submit(
        self,
        store: &mut EventStore,
        editing: Option<&str>,
    ) -> ScheduleResult<Option<Event>> {
        let draft = self.into_draft()?;
        match editing {
            None => Ok(Some(store.add(draft))),
            Some(id) => {
                if store.update(id, EventUpdate::from(draft)) {
                    Ok(store.get(id).cloned())
                } else {
                    Ok(None)
                }
            }
        }
    }
}
