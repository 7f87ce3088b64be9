//! In-memory event store.
//!
//! The store is an ordinary owned value: the application creates one at
//! startup (usually with `with_seed_events`) and hands out references.
//! Mutations on unknown ids are ignored rather than reported.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::event::{Event, EventCategory, EventDraft, EventUpdate};
use crate::query;

/// Sample events shown on first launch:
/// (title, description, date, start, end, category)
type SeedEvent = (
    &'static str,
    &'static str,
    (i32, u32, u32),
    (u32, u32),
    (u32, u32),
    &'static str,
);

const SEED_EVENTS: [SeedEvent; 3] = [
    (
        "Team Meeting",
        "Weekly team sync and project updates",
        (2025, 1, 20),
        (9, 0),
        (10, 0),
        "Work",
    ),
    (
        "Lunch with Sarah",
        "Catch up over lunch at the new restaurant",
        (2025, 1, 20),
        (12, 30),
        (14, 0),
        "Social",
    ),
    (
        "Gym Workout",
        "Leg day and cardio session",
        (2025, 1, 21),
        (18, 0),
        (19, 30),
        "Health",
    ),
];

/// The authoritative collection of events for one session.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the sample events.
    pub fn with_seed_events() -> Self {
        let mut store = Self::new();
        for draft in seed_drafts() {
            store.add(draft);
        }
        store
    }

    /// Add an event, assigning it a fresh id. Returns the stored event.
    pub fn add(&mut self, draft: EventDraft) -> Event {
        let id = self.fresh_id();
        let event = Event::from_draft(id, draft);
        debug!("Created event: {} ({})", event.title, event.id);
        self.events.push(event.clone());
        event
    }

    /// Merge `update` into the event with `id`.
    ///
    /// Returns false (and changes nothing) when no such event exists.
    pub fn update(&mut self, id: &str, update: EventUpdate) -> bool {
        match self.events.iter_mut().find(|e| e.id == id) {
            Some(event) => {
                update.apply_to(event);
                debug!("Updated event: {} ({})", event.title, event.id);
                true
            }
            None => {
                debug!("Ignoring update for unknown event {}", id);
                false
            }
        }
    }

    /// Remove the event with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        let removed = self.events.len() != before;
        if removed {
            debug!("Deleted event: {}", id);
        } else {
            debug!("Ignoring delete for unknown event {}", id);
        }
        removed
    }

    /// All events in insertion order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events starting on `day`, ordered by start time.
    pub fn events_for_day(&self, day: NaiveDate) -> Vec<Event> {
        query::events_for_day(&self.events, day)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

fn seed_drafts() -> Vec<EventDraft> {
    SEED_EVENTS
        .iter()
        .filter_map(|(title, description, (y, m, d), start, end, category)| {
            let date = NaiveDate::from_ymd_opt(*y, *m, *d)?;
            let start: NaiveDateTime = date.and_hms_opt(start.0, start.1, 0)?;
            let end: NaiveDateTime = date.and_hms_opt(end.0, end.1, 0)?;
            let category = EventCategory::find_default(category)?;
            Some(EventDraft::new(*title, start, end, category).with_description(*description))
        })
        .collect()
}
