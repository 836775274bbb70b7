//! Running statistics over the completion history.
//!
//! The counters are maintained as a side effect of completion-record
//! mutation and persisted as plain scalars (plus the date history) in
//! the application state file, so the dashboard never replays the
//! database.
//!
//! The best streak counts consecutive calendar days with at least one
//! completion. Earlier revisions of this logic compared each date to
//! its sorted predecessor with a same-day test that could never hold
//! for distinct days; the adjacency test below is the intended
//! semantic.

use crate::libs::state::AppState;
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

/// Number of completions on a single day that makes it a "perfect day".
pub const PERFECT_DAY_COMPLETIONS: usize = 3;

pub struct StatisticsService {
    state: AppState,
}

impl StatisticsService {
    pub fn load() -> Result<Self> {
        Ok(Self { state: AppState::read()? })
    }

    pub fn total_completions(&self) -> u32 {
        self.state.total_completions
    }

    pub fn best_streak(&self) -> u32 {
        self.state.best_streak
    }

    pub fn perfect_days(&self) -> u32 {
        self.state.perfect_days
    }

    /// Integer average of completions per day with at least one
    /// completion; 0 when nothing has been completed.
    pub fn average_completion(&self) -> u32 {
        let distinct_days = self.state.completion_dates.iter().collect::<BTreeSet<_>>().len() as u32;
        if distinct_days == 0 {
            return 0;
        }
        self.state.total_completions / distinct_days
    }

    pub fn is_empty(&self) -> bool {
        self.state.completion_dates.is_empty()
    }

    /// Record one completion and refresh the derived counters.
    pub fn on_completion(&mut self, date: NaiveDate) -> Result<()> {
        self.state.total_completions += 1;
        self.state.completion_dates.push(date);
        self.update_best_streak();
        self.update_perfect_days();
        self.state.save()
    }

    /// Undo one completion and refresh the derived counters.
    pub fn on_uncompletion(&mut self, date: NaiveDate) -> Result<()> {
        if self.state.total_completions == 0 {
            return Ok(());
        }
        self.state.total_completions -= 1;
        if let Some(index) = self.state.completion_dates.iter().position(|recorded| *recorded == date) {
            self.state.completion_dates.remove(index);
        }
        self.update_best_streak();
        self.update_perfect_days();
        self.state.save()
    }

    fn update_best_streak(&mut self) {
        let sorted_dates: BTreeSet<NaiveDate> = self.state.completion_dates.iter().copied().collect();
        let mut current_streak = 0u32;
        let mut max_streak = 0u32;
        let mut previous: Option<NaiveDate> = None;

        for date in sorted_dates {
            current_streak = match previous {
                Some(prev) if prev.succ_opt() == Some(date) => current_streak + 1,
                _ => 1,
            };
            max_streak = max_streak.max(current_streak);
            previous = Some(date);
        }
        self.state.best_streak = max_streak;
    }

    fn update_perfect_days(&mut self) {
        let mut per_day: HashMap<NaiveDate, usize> = HashMap::new();
        for date in &self.state.completion_dates {
            *per_day.entry(*date).or_insert(0) += 1;
        }
        self.state.perfect_days = per_day.values().filter(|count| **count == PERFECT_DAY_COMPLETIONS).count() as u32;
    }
}
