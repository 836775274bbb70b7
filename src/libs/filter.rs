//! Tracker list filters.
//!
//! Four filter kinds narrow the visible tracker set for a given date.
//! An irregular event stays visible until its first completion; after
//! that it only shows up on the day it was completed. Search text
//! narrows every filter with a case-insensitive substring match on the
//! title.

use crate::libs::tracker::Tracker;
use crate::libs::weekday::WeekDay;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterKind {
    /// Every tracker eligible on the given date
    All,
    /// Same predicate, pinned to the current date
    Today,
    /// Trackers with a completion record on the date
    Completed,
    /// Date-eligible trackers without a completion record
    Uncompleted,
}

/// Per-tracker completion facts the predicate needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionFacts {
    pub completed_on_date: bool,
    pub completed_ever: bool,
}

impl FilterKind {
    /// Visibility of one tracker under this filter.
    pub fn is_visible(&self, tracker: &Tracker, weekday: WeekDay, facts: CompletionFacts) -> bool {
        let scheduled = tracker.schedule.contains(weekday);
        let open_event = tracker.schedule.is_empty() && !facts.completed_ever;
        match self {
            FilterKind::All | FilterKind::Today => scheduled || open_event || facts.completed_on_date,
            FilterKind::Completed => facts.completed_on_date,
            FilterKind::Uncompleted => (scheduled && !facts.completed_on_date) || open_event,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::All => "All trackers",
            FilterKind::Today => "Trackers for today",
            FilterKind::Completed => "Completed",
            FilterKind::Uncompleted => "Uncompleted",
        }
    }
}

/// Case-insensitive substring match on the tracker title; an empty
/// search matches everything.
pub fn matches_search(tracker: &Tracker, search: &str) -> bool {
    search.is_empty() || tracker.title.to_lowercase().contains(&search.to_lowercase())
}
