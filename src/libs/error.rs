//! Typed application errors.
//!
//! Most operations propagate `anyhow::Result` and are reported through the
//! message system; this enum exists for the conditions a caller must be
//! able to distinguish programmatically, chiefly the not-found failure of
//! a tracker update.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Tracker with id {0} not found")]
    TrackerNotFound(i64),

    #[error("Category '{0}' not found")]
    CategoryNotFound(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid row reference: section {0}, row {1}")]
    InvalidRowRef(usize, usize),
}
