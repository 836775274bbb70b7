//! # Habita - Habit & Event Tracker
//!
//! A command-line tracker for recurring habits and one-off irregular
//! events: organize trackers into categories, mark daily completions,
//! filter a sectioned list by date, weekday, search text, and
//! completion state, and follow streak statistics.
//!
//! ## Features
//!
//! - **Trackers**: Recurring habits on a weekly schedule or one-off events
//! - **Categories**: Named groups with a distinguished Pinned section
//! - **Completions**: Day-granular marks, at most one per tracker and day
//! - **Filtered Lists**: All / Today / Completed / Uncompleted with search
//! - **Change Observation**: Structured diffs between list snapshots
//! - **Statistics**: Totals, best streak, perfect days, daily average
//!
//! ## Usage
//!
//! ```rust,no_run
//! use habita::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
