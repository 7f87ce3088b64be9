//! Core types for the schedule calendar.
//!
//! This crate holds everything the day, week and month views compute on:
//! - `EventStore`, the in-memory authoritative collection of events
//! - `query`, `layout` and `days` for day bucketing, pixel geometry and grid dates
//! - `view` and `form` for header navigation and the event form payload
//! - `config` for user-tunable grid settings

pub mod config;
pub mod days;
pub mod error;
pub mod event;
pub mod form;
pub mod layout;
pub mod query;
pub mod store;
pub mod view;

pub use error::{ScheduleError, ScheduleResult};
pub use event::{Event, EventCategory, EventDraft, EventUpdate, default_categories};
pub use store::EventStore;
