use crate::libs::messages::Message;
use crate::libs::palette;
use crate::libs::schedule::Schedule;
use crate::msg_bail_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// What kind of tracker a record is. Persisted as 1 (habit) / 2
/// (irregular event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackerKind {
    Habit,
    IrregularEvent,
}

impl TrackerKind {
    pub fn to_db(&self) -> i64 {
        match self {
            TrackerKind::Habit => 1,
            TrackerKind::IrregularEvent => 2,
        }
    }

    pub fn from_db(value: i64) -> Option<Self> {
        match value {
            1 => Some(TrackerKind::Habit),
            2 => Some(TrackerKind::IrregularEvent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrackerKind::Habit => "Habit",
            TrackerKind::IrregularEvent => "Irregular event",
        }
    }
}

/// A single habit or irregular event.
///
/// The id is assigned by the store at insert and never changes. A
/// habit's schedule is non-empty; an irregular event's schedule is
/// always empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    pub id: Option<i64>,
    pub title: String,
    pub color: String,
    pub emoji: String,
    pub schedule: Schedule,
    pub kind: TrackerKind,
}

impl Tracker {
    pub fn new(title: &str, color: &str, emoji: &str, schedule: Schedule, kind: TrackerKind) -> Self {
        Tracker {
            id: None,
            title: title.to_string(),
            color: color.to_string(),
            emoji: emoji.to_string(),
            schedule,
            kind,
        }
    }

    /// Check the entity invariants before it reaches the store.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            msg_bail_anyhow!(Message::TrackerTitleEmpty);
        }
        if !palette::is_palette_color(&self.color) {
            msg_bail_anyhow!(Message::ColorNotInPalette(self.color.clone()));
        }
        if !palette::is_palette_emoji(&self.emoji) {
            msg_bail_anyhow!(Message::EmojiNotInPalette(self.emoji.clone()));
        }
        match self.kind {
            TrackerKind::Habit if self.schedule.is_empty() => {
                msg_bail_anyhow!(Message::HabitScheduleEmpty(self.title.clone()))
            }
            TrackerKind::IrregularEvent if !self.schedule.is_empty() => {
                msg_bail_anyhow!(Message::EventScheduleNotEmpty(self.title.clone()))
            }
            _ => Ok(()),
        }
    }
}
