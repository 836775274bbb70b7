//! Completion toggling commands.
//!
//! `done` and `undone` add and remove the day-granular completion mark
//! for a tracker and drive the statistics counters. Future dates are
//! rejected here, at the command boundary; the persistence layer
//! itself does not enforce that rule.

use crate::{
    db::{records::CompletionRecords, trackers::Trackers},
    libs::{error::AppError, messages::Message, statistics::StatisticsService},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Tracker id or title
    tracker: String,
    /// Completion date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    date: Option<String>,
}

#[derive(Debug, Args)]
pub struct UndoneArgs {
    /// Tracker id or title
    tracker: String,
    /// Completion date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    date: Option<String>,
}

pub fn done(args: DoneArgs) -> Result<()> {
    change_completion(&args.tracker, args.date.as_deref(), true)
}

pub fn undone(args: UndoneArgs) -> Result<()> {
    change_completion(&args.tracker, args.date.as_deref(), false)
}

fn change_completion(identifier: &str, date: Option<&str>, completed: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let date = match date {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(value.to_string()))?,
        None => today,
    };
    if date > today {
        msg_error!(Message::FutureDateRejected(date.to_string()));
        return Ok(());
    }

    let mut trackers = Trackers::new()?;
    let row = match trackers.resolve(identifier)? {
        Some(row) => row,
        None => {
            msg_error!(Message::TrackerNotFound(identifier.to_string()));
            return Ok(());
        }
    };
    let tracker_id = row.tracker.id.unwrap_or_default();

    let mut records = CompletionRecords::new()?;
    let mut statistics = StatisticsService::load()?;

    if completed {
        if records.add(tracker_id, date)? {
            statistics.on_completion(date)?;
            msg_success!(Message::CompletionMarked(row.tracker.title, date.to_string()));
        } else {
            msg_info!(Message::AlreadyCompleted(row.tracker.title, date.to_string()));
        }
    } else if records.remove(tracker_id, date)? {
        statistics.on_uncompletion(date)?;
        msg_success!(Message::CompletionUnmarked(row.tracker.title, date.to_string()));
    } else {
        msg_info!(Message::NotCompletedYet(row.tracker.title, date.to_string()));
    }

    Ok(())
}
