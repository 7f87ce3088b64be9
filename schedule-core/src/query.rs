//! Day bucketing and duration queries over event slices.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::event::Event;

/// Events whose start falls on `day`, sorted by start time.
///
/// The sort is stable, so events starting at the same instant keep their
/// relative order from `events`.
pub fn events_for_day(events: &[Event], day: NaiveDate) -> Vec<Event> {
    let mut matching: Vec<Event> = events
        .iter()
        .filter(|event| event.start.date() == day)
        .cloned()
        .collect();

    matching.sort_by_key(|event| event.start);
    matching
}

/// `end - start`. Negative when the event ends before it starts.
pub fn event_duration(event: &Event) -> Duration {
    event.end - event.start
}

/// Whether two date-times fall on the same calendar day.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventCategory, EventDraft};
    use crate::store::EventStore;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn add(store: &mut EventStore, title: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        store.add(EventDraft::new(title, start, end, EventCategory::default()))
    }

    #[test]
    fn events_for_day_orders_by_start() {
        let mut store = EventStore::new();
        add(&mut store, "Lunch", at(20, 12, 30), at(20, 14, 0));
        add(&mut store, "Standup", at(20, 9, 0), at(20, 9, 15));

        let day = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let titles: Vec<_> = events_for_day(store.list(), day)
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, ["Standup", "Lunch"]);
    }

    #[test]
    fn events_for_day_excludes_other_days() {
        let mut store = EventStore::new();
        add(&mut store, "Late night", at(19, 23, 59), at(20, 0, 30));
        add(&mut store, "Midnight", at(20, 0, 0), at(20, 1, 0));
        add(&mut store, "Last minute", at(20, 23, 59), at(21, 0, 0));
        add(&mut store, "Tomorrow", at(21, 0, 0), at(21, 1, 0));

        let day = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let events = events_for_day(store.list(), day);

        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.start.date() == day));
        assert!(events.windows(2).all(|w| w[0].start <= w[1].start));
    }

    #[test]
    fn events_for_day_keeps_order_on_ties() {
        let mut store = EventStore::new();
        let first = add(&mut store, "First", at(20, 10, 0), at(20, 11, 0));
        add(&mut store, "Early", at(20, 8, 0), at(20, 9, 0));
        let second = add(&mut store, "Second", at(20, 10, 0), at(20, 10, 30));

        let day = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let events = events_for_day(store.list(), day);
        assert_eq!(events[1].id, first.id);
        assert_eq!(events[2].id, second.id);
    }

    #[test]
    fn events_for_day_on_empty_slice() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        assert!(events_for_day(&[], day).is_empty());
    }

    #[test]
    fn duration_in_milliseconds() {
        let mut store = EventStore::new();
        let event = add(&mut store, "Workout", at(21, 18, 0), at(21, 19, 30));
        assert_eq!(event_duration(&event).num_milliseconds(), 90 * 60 * 1000);
    }

    #[test]
    fn duration_negative_when_end_precedes_start() {
        let mut store = EventStore::new();
        let event = add(&mut store, "Backwards", at(20, 10, 0), at(20, 9, 0));
        assert_eq!(event_duration(&event).num_minutes(), -60);
    }

    #[test]
    fn same_day_ignores_time() {
        assert!(is_same_day(at(20, 0, 0), at(20, 23, 59)));
        assert!(!is_same_day(at(20, 23, 59), at(21, 0, 0)));
    }
}
