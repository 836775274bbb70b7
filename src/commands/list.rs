use crate::{
    libs::{error::AppError, filter::FilterKind, list::TrackerList, messages::Message, view::View},
    msg_debug, msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which trackers to show
    #[arg(short, long, value_enum, default_value = "today")]
    filter: FilterKind,
    /// Reference date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    date: Option<String>,
    /// Case-insensitive title search
    #[arg(short, long, default_value = "")]
    search: String,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let date = match &args.date {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(value.clone()))?,
        None => Local::now().date_naive(),
    };

    let mut list = TrackerList::new()?;
    list.subscribe(Box::new(|diff| {
        msg_debug!(format!(
            "list diff: +{}/-{} sections, +{}/-{} rows, {} updated, {} moved",
            diff.inserted_sections.len(),
            diff.deleted_sections.len(),
            diff.inserted_rows.len(),
            diff.deleted_rows.len(),
            diff.updated_rows.len(),
            diff.moved_rows.len()
        ));
    }));
    list.apply_filter(args.filter, date, &args.search)?;

    if list.sections().is_empty() {
        msg_info!(Message::NothingToTrack);
        return Ok(());
    }

    msg_print!(Message::ListHeader(args.filter.label().to_string(), list.date().to_string()), true);
    View::sections(list.sections())?;
    Ok(())
}
