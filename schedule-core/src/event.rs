//! Event and category types.
//!
//! Events live in local wall-clock time (`NaiveDateTime`); there is no
//! timezone attached to anything in this crate.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in categories: (id, name, color).
const DEFAULT_CATEGORIES: [(&str, &str, &str); 5] = [
    ("1", "Work", "#3B82F6"),
    ("2", "Personal", "#8B5CF6"),
    ("3", "Health", "#10B981"),
    ("4", "Social", "#F59E0B"),
    ("5", "Important", "#EF4444"),
];

/// A named, colored classification attached to an event.
///
/// Events hold their own copy of the category they were created or edited
/// with, so later changes to a category definition never reach existing
/// events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCategory {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl EventCategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        EventCategory {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Look up a built-in category by name (case-insensitive) or by id.
    pub fn find_default(key: &str) -> Option<Self> {
        let key = key.trim();
        default_categories()
            .into_iter()
            .find(|c| c.id == key || c.name.eq_ignore_ascii_case(key))
    }
}

/// The first built-in category ("Work"), which new events start with.
impl Default for EventCategory {
    fn default() -> Self {
        let (id, name, color) = DEFAULT_CATEGORIES[0];
        EventCategory::new(id, name, color)
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The five built-in categories, in display order.
pub fn default_categories() -> Vec<EventCategory> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(id, name, color)| EventCategory::new(*id, *name, *color))
        .collect()
}

/// A single calendar entry owned by the `EventStore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category: EventCategory,
    /// Display color, normally the category's color at the time of the edit
    pub color: String,
    #[serde(default)]
    pub all_day: bool,
}

impl Event {
    pub(crate) fn from_draft(id: String, draft: EventDraft) -> Self {
        Event {
            id,
            title: draft.title,
            description: draft.description,
            start: draft.start,
            end: draft.end,
            category: draft.category,
            color: draft.color,
            all_day: draft.all_day,
        }
    }

    /// Calendar day the event starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Everything an `Event` has except its id, which only the store assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category: EventCategory,
    pub color: String,
    pub all_day: bool,
}

impl EventDraft {
    /// Create a draft whose color follows the category.
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        category: EventCategory,
    ) -> Self {
        EventDraft {
            title: title.into(),
            description: None,
            start,
            end,
            color: category.color.clone(),
            category,
            all_day: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }
}

/// A partial set of event fields. Only the fields that are `Some` are
/// written by `apply_to`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventUpdate {
    pub title: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub category: Option<EventCategory>,
    pub color: Option<String>,
    pub all_day: Option<bool>,
}

impl EventUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn category(mut self, category: EventCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = Some(all_day);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply this update to an event.
    pub fn apply_to(&self, event: &mut Event) {
        if let Some(ref title) = self.title {
            event.title = title.clone();
        }
        if let Some(ref description) = self.description {
            event.description = description.clone();
        }
        if let Some(start) = self.start {
            event.start = start;
        }
        if let Some(end) = self.end {
            event.end = end;
        }
        if let Some(ref category) = self.category {
            event.category = category.clone();
        }
        if let Some(ref color) = self.color {
            event.color = color.clone();
        }
        if let Some(all_day) = self.all_day {
            event.all_day = all_day;
        }
    }
}

/// A full draft as an update replaces every field except the id.
impl From<EventDraft> for EventUpdate {
    fn from(draft: EventDraft) -> Self {
        EventUpdate {
            title: Some(draft.title),
            description: Some(draft.description),
            start: Some(draft.start),
            end: Some(draft.end),
            category: Some(draft.category),
            color: Some(draft.color),
            all_day: Some(draft.all_day),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 20)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn sample_event() -> Event {
        let draft = EventDraft::new("Team Meeting", at(9, 0), at(10, 0), EventCategory::default())
            .with_description("Weekly sync");
        Event::from_draft("evt-1".to_string(), draft)
    }

    #[test]
    fn default_categories_in_display_order() {
        let names: Vec<_> = default_categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Work", "Personal", "Health", "Social", "Important"]);
    }

    #[test]
    fn find_default_by_name_or_id() {
        let health = EventCategory::find_default("health").unwrap();
        assert_eq!(health.color, "#10B981");
        assert_eq!(EventCategory::find_default("5").unwrap().name, "Important");
        assert!(EventCategory::find_default("Chores").is_none());
    }

    #[test]
    fn draft_color_follows_category() {
        let social = EventCategory::find_default("Social").unwrap();
        let draft = EventDraft::new("Lunch", at(12, 30), at(14, 0), social);
        assert_eq!(draft.color, "#F59E0B");
        assert!(!draft.all_day);
        assert_eq!(draft.description, None);
    }

    #[test]
    fn apply_to_only_touches_supplied_fields() {
        let mut event = sample_event();
        let before = event.clone();

        EventUpdate::new().title("Retro").apply_to(&mut event);

        assert_eq!(event.title, "Retro");
        assert_eq!(event.description, before.description);
        assert_eq!(event.start, before.start);
        assert_eq!(event.end, before.end);
        assert_eq!(event.category, before.category);
        assert_eq!(event.color, before.color);
    }

    #[test]
    fn apply_to_can_clear_description() {
        let mut event = sample_event();
        EventUpdate::new().description(None).apply_to(&mut event);
        assert_eq!(event.description, None);
    }

    #[test]
    fn category_change_keeps_copied_value() {
        let mut event = sample_event();
        let mut health = EventCategory::find_default("Health").unwrap();
        EventUpdate::new().category(health.clone()).apply_to(&mut event);

        health.color = "#000000".to_string();
        assert_eq!(event.category.color, "#10B981");
        // Color is its own field and was not part of the update
        assert_eq!(event.color, "#3B82F6");
    }

    #[test]
    fn update_from_draft_replaces_everything() {
        let mut event = sample_event();
        let draft = EventDraft::new(
            "Gym",
            at(18, 0),
            at(19, 30),
            EventCategory::find_default("Health").unwrap(),
        )
        .all_day(true);

        EventUpdate::from(draft).apply_to(&mut event);

        assert_eq!(event.id, "evt-1");
        assert_eq!(event.title, "Gym");
        assert_eq!(event.description, None);
        assert_eq!(event.color, "#10B981");
        assert!(event.all_day);
    }

    #[test]
    fn empty_update() {
        assert!(EventUpdate::new().is_empty());
        assert!(!EventUpdate::new().all_day(false).is_empty());
    }

    #[test]
    fn event_serializes_without_missing_description() {
        let mut event = sample_event();
        event.description = None;
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["start"], "2025-01-20T09:00:00");

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
