//! Weekly schedule of a tracker.
//!
//! A schedule is a set of weekdays. Habits carry a non-empty schedule;
//! irregular events always carry an empty one, the single convention
//! used throughout the crate. For storage the set is marshalled to a
//! comma-separated list of weekday numbers ("1,3,5").

use crate::libs::weekday::{WeekDay, ALL_WEEK_DAYS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule(BTreeSet<WeekDay>);

impl Schedule {
    pub fn new() -> Self {
        Schedule(BTreeSet::new())
    }

    pub fn from_days<I: IntoIterator<Item = WeekDay>>(days: I) -> Self {
        Schedule(days.into_iter().collect())
    }

    /// All seven weekdays.
    pub fn every_day() -> Self {
        Self::from_days(ALL_WEEK_DAYS)
    }

    /// Monday through Friday.
    pub fn weekdays() -> Self {
        Self::from_days([WeekDay::Monday, WeekDay::Tuesday, WeekDay::Wednesday, WeekDay::Thursday, WeekDay::Friday])
    }

    /// Saturday and Sunday.
    pub fn weekend() -> Self {
        Self::from_days([WeekDay::Saturday, WeekDay::Sunday])
    }

    pub fn insert(&mut self, day: WeekDay) {
        self.0.insert(day);
    }

    pub fn contains(&self, day: WeekDay) -> bool {
        self.0.contains(&day)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn days(&self) -> impl Iterator<Item = WeekDay> + '_ {
        self.0.iter().copied()
    }

    /// Storage form: weekday numbers joined with commas, empty string
    /// for an empty schedule.
    pub fn to_storage(&self) -> String {
        self.0.iter().map(|day| day.number().to_string()).collect::<Vec<_>>().join(",")
    }

    /// Inverse of [`Schedule::to_storage`]. Unknown numbers are skipped.
    pub fn from_storage(value: &str) -> Self {
        let days = value.split(',').filter_map(|part| part.trim().parse::<u32>().ok()).filter_map(WeekDay::from_number);
        Self::from_days(days)
    }

    /// Human-readable label. The named sets exist only for display; the
    /// containment test never consults them.
    pub fn label(&self) -> String {
        if *self == Self::every_day() {
            return "Every day".to_string();
        }
        if *self == Self::weekdays() {
            return "Weekdays".to_string();
        }
        if *self == Self::weekend() {
            return "Weekend".to_string();
        }
        if self.0.is_empty() {
            return "No schedule".to_string();
        }
        self.0.iter().map(|day| day.short_text()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
