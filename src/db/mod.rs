//! Database layer for the habita application.
//!
//! A SQLite persistence layer with one repository module per entity and
//! a versioned migration system. Every repository owns its connection,
//! opened through the shared [`db::Db`] bootstrap; there is no ambient
//! global store.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use habita::db::trackers::Trackers;
//! use habita::libs::schedule::Schedule;
//! use habita::libs::tracker::{Tracker, TrackerKind};
//!
//! # fn main() -> anyhow::Result<()> {
//! let tracker = Tracker::new("Run", "#FD4C49", "🙂", Schedule::weekdays(), TrackerKind::Habit);
//! let mut trackers = Trackers::new()?;
//! trackers.insert("Fitness", &tracker)?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Category lookup, creation, and the Pinned pseudo-category.
pub mod categories;

/// Tracker CRUD, pinning, and joined fetches.
pub mod trackers;

/// Day-granular completion records.
pub mod records;
