//! Day-of-week model for tracker schedules.
//!
//! Weekdays are numbered Monday=1 through Sunday=7. Calendar libraries
//! index weeks from Sunday=1, so `WeekDay::from_date` applies the fixed
//! wraparound conversion before any schedule containment test.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

pub const ALL_WEEK_DAYS: [WeekDay; 7] = [
    WeekDay::Monday,
    WeekDay::Tuesday,
    WeekDay::Wednesday,
    WeekDay::Thursday,
    WeekDay::Friday,
    WeekDay::Saturday,
    WeekDay::Sunday,
];

impl WeekDay {
    /// Weekday of a calendar date, in the Monday=1..Sunday=7 numbering.
    ///
    /// The native week index counts Sunday as 1; Sunday maps to 7 and
    /// every other day shifts down by one.
    pub fn from_date(date: NaiveDate) -> Self {
        let native = date.weekday().number_from_sunday();
        let number = if native == 1 { 7 } else { native - 1 };
        Self::from_number(number).expect("weekday conversion is total over 1..=7")
    }

    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(WeekDay::Monday),
            2 => Some(WeekDay::Tuesday),
            3 => Some(WeekDay::Wednesday),
            4 => Some(WeekDay::Thursday),
            5 => Some(WeekDay::Friday),
            6 => Some(WeekDay::Saturday),
            7 => Some(WeekDay::Sunday),
            _ => None,
        }
    }

    pub fn number(&self) -> u32 {
        *self as u32
    }

    pub fn full_text(&self) -> &'static str {
        match self {
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
            WeekDay::Friday => "Friday",
            WeekDay::Saturday => "Saturday",
            WeekDay::Sunday => "Sunday",
        }
    }

    pub fn short_text(&self) -> &'static str {
        match self {
            WeekDay::Monday => "Mon",
            WeekDay::Tuesday => "Tue",
            WeekDay::Wednesday => "Wed",
            WeekDay::Thursday => "Thu",
            WeekDay::Friday => "Fri",
            WeekDay::Saturday => "Sat",
            WeekDay::Sunday => "Sun",
        }
    }

    /// Parse a user-supplied day name ("mon", "monday", "3").
    pub fn parse(value: &str) -> Option<Self> {
        if let Ok(number) = value.parse::<u32>() {
            return Self::from_number(number);
        }
        let lower = value.to_lowercase();
        ALL_WEEK_DAYS
            .into_iter()
            .find(|day| day.full_text().to_lowercase() == lower || day.short_text().to_lowercase() == lower)
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_text())
    }
}
