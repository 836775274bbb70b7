//! Persisted application state.
//!
//! A small key-value area beside the database: the onboarding flag and
//! the statistics scalars. Stored as `state.json` in the application
//! data directory so the counters survive restarts without replaying
//! history. There is deliberately no transaction tying this file to the
//! completion-record tables; a crash between the two writes leaves them
//! inconsistent, which this application accepts.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const STATE_FILE_NAME: &str = "state.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct AppState {
    /// Whether the first-run setup has been completed.
    #[serde(default)]
    pub has_seen_onboarding: bool,

    /// Count of all completion records ever recorded.
    #[serde(default)]
    pub total_completions: u32,

    /// Every date a completion was recorded on, one entry per record.
    /// Kept redundantly so the derived counters can be recomputed.
    #[serde(default)]
    pub completion_dates: Vec<NaiveDate>,

    /// Longest run of consecutive days with at least one completion.
    #[serde(default)]
    pub best_streak: u32,

    /// Days on which exactly the perfect-day number of completions
    /// were recorded.
    #[serde(default)]
    pub perfect_days: u32,
}

impl AppState {
    /// Load the state file, falling back to defaults when absent.
    pub fn read() -> Result<AppState> {
        let state_file_path = DataStorage::new().get_path(STATE_FILE_NAME)?;

        if !state_file_path.exists() {
            return Ok(AppState::default());
        }

        let state_str = fs::read_to_string(state_file_path)?;
        let state: AppState = serde_json::from_str(&state_str)?;
        Ok(state)
    }

    pub fn save(&self) -> Result<()> {
        let state_file_path = DataStorage::new().get_path(STATE_FILE_NAME)?;

        let state_file = File::create(state_file_path)?;
        serde_json::to_writer_pretty(&state_file, &self)?;
        Ok(())
    }
}
