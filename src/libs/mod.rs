//! Core library modules for the habita application.
//!
//! Domain models (weekdays, schedules, trackers, filters), the
//! sectioned live list, the statistics service, and the ambient
//! infrastructure they sit on: configuration, persisted state, data
//! directory resolution, messaging, and console rendering.

pub mod config;
pub mod data_storage;
pub mod error;
pub mod filter;
pub mod list;
pub mod messages;
pub mod palette;
pub mod schedule;
pub mod state;
pub mod statistics;
pub mod tracker;
pub mod view;
pub mod weekday;
