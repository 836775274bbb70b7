use crate::{
    db::trackers::Trackers,
    libs::{
        config::Config,
        error::AppError,
        messages::Message,
        palette,
        schedule::Schedule,
        tracker::{Tracker, TrackerKind},
        weekday::WeekDay,
    },
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TrackerArgs {
    #[command(subcommand)]
    command: Option<TrackerCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    /// Recurring habit with a weekly schedule
    Habit,
    /// One-off irregular event
    Event,
}

impl From<KindArg> for TrackerKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Habit => TrackerKind::Habit,
            KindArg::Event => TrackerKind::IrregularEvent,
        }
    }
}

#[derive(Debug, Subcommand)]
enum TrackerCommand {
    /// Create a new tracker
    Create {
        /// Tracker title
        title: String,
        /// Category title (defaults to the configured category)
        #[arg(short, long)]
        category: Option<String>,
        /// Tracker kind
        #[arg(short, long, value_enum, default_value = "habit")]
        kind: KindArg,
        /// Weekly schedule: "mon,wed,fri", "every-day", "weekdays", "weekend"
        #[arg(short, long)]
        schedule: Option<String>,
        /// Palette color (index 1-18 or hex value)
        #[arg(long, default_value = "1")]
        color: String,
        /// Palette emoji (index 1-18 or literal)
        #[arg(long, default_value = "1")]
        emoji: String,
    },
    /// Edit an existing tracker
    Edit {
        /// Tracker id
        id: i64,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New category title
        #[arg(short, long)]
        category: Option<String>,
        /// New kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
        /// New weekly schedule
        #[arg(short, long)]
        schedule: Option<String>,
        /// New palette color
        #[arg(long)]
        color: Option<String>,
        /// New palette emoji
        #[arg(long)]
        emoji: Option<String>,
    },
    /// Delete a tracker and its completions
    Delete {
        /// Tracker id or title
        tracker: String,
    },
    /// Pin a tracker so it sorts first
    Pin {
        /// Tracker id or title
        tracker: String,
    },
    /// Restore a pinned tracker to its category
    Unpin {
        /// Tracker id or title
        tracker: String,
    },
}

pub fn cmd(args: TrackerArgs) -> Result<()> {
    match args.command {
        Some(TrackerCommand::Create {
            title,
            category,
            kind,
            schedule,
            color,
            emoji,
        }) => handle_create(title, category, kind, schedule, color, emoji),
        Some(TrackerCommand::Edit {
            id,
            title,
            category,
            kind,
            schedule,
            color,
            emoji,
        }) => handle_edit(id, title, category, kind, schedule, color, emoji),
        Some(TrackerCommand::Delete { tracker }) => handle_delete(tracker),
        Some(TrackerCommand::Pin { tracker }) => handle_pin(tracker),
        Some(TrackerCommand::Unpin { tracker }) => handle_unpin(tracker),
        None => handle_interactive(),
    }
}

/// Parse a schedule argument: a named set or a comma-separated weekday
/// list.
fn parse_schedule(value: &str) -> Result<Schedule> {
    match value.to_lowercase().as_str() {
        "every-day" | "everyday" | "daily" => return Ok(Schedule::every_day()),
        "weekdays" => return Ok(Schedule::weekdays()),
        "weekend" => return Ok(Schedule::weekend()),
        _ => {}
    }
    let mut schedule = Schedule::new();
    for part in value.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match WeekDay::parse(part) {
            Some(day) => schedule.insert(day),
            None => return Err(crate::msg_error_anyhow!(Message::InvalidWeekDay(part.to_string()))),
        }
    }
    Ok(schedule)
}

fn handle_create(title: String, category: Option<String>, kind: KindArg, schedule: Option<String>, color: String, emoji: String) -> Result<()> {
    let Some(color) = palette::resolve_color(&color) else {
        msg_error!(Message::ColorNotInPalette(color));
        return Ok(());
    };
    let Some(emoji) = palette::resolve_emoji(&emoji) else {
        msg_error!(Message::EmojiNotInPalette(emoji));
        return Ok(());
    };
    let schedule = match schedule {
        Some(value) => parse_schedule(&value)?,
        None => Schedule::new(),
    };

    let tracker = Tracker::new(&title, &color, &emoji, schedule, kind.into());
    if let Err(e) = tracker.validate() {
        msg_error!(e);
        return Ok(());
    }

    let category = category.unwrap_or_else(|| Config::read().unwrap_or_default().default_category());

    // Persistence failures are logged and the command exits cleanly;
    // nothing is rolled back on the caller's side.
    let mut trackers = Trackers::new()?;
    match trackers.insert(&category, &tracker) {
        Ok(_) => msg_success!(Message::TrackerCreated(title)),
        Err(e) => msg_error!(Message::StoreOperationFailed(e.to_string())),
    }
    Ok(())
}

fn handle_edit(
    id: i64,
    title: Option<String>,
    category: Option<String>,
    kind: Option<KindArg>,
    schedule: Option<String>,
    color: Option<String>,
    emoji: Option<String>,
) -> Result<()> {
    let mut trackers = Trackers::new()?;

    let existing = match trackers.get(id)? {
        Some(row) => row,
        None => {
            msg_error!(Message::TrackerNotFound(id.to_string()));
            return Ok(());
        }
    };

    let mut updated = existing.tracker.clone();
    if let Some(title) = title {
        updated.title = title;
    }
    if let Some(kind) = kind {
        updated.kind = kind.into();
    }
    if let Some(value) = schedule {
        updated.schedule = parse_schedule(&value)?;
    }
    if let Some(value) = color {
        match palette::resolve_color(&value) {
            Some(color) => updated.color = color,
            None => {
                msg_error!(Message::ColorNotInPalette(value));
                return Ok(());
            }
        }
    }
    if let Some(value) = emoji {
        match palette::resolve_emoji(&value) {
            Some(emoji) => updated.emoji = emoji,
            None => {
                msg_error!(Message::EmojiNotInPalette(value));
                return Ok(());
            }
        }
    }
    if let Err(e) = updated.validate() {
        msg_error!(e);
        return Ok(());
    }

    let category = category.unwrap_or(existing.category_title);
    match trackers.update(&category, &updated) {
        Ok(()) => msg_success!(Message::TrackerUpdated(updated.title)),
        Err(e) => match e.downcast_ref::<AppError>() {
            Some(AppError::TrackerNotFound(id)) => msg_error!(Message::TrackerNotFound(id.to_string())),
            _ => msg_error!(Message::StoreOperationFailed(e.to_string())),
        },
    }
    Ok(())
}

fn handle_delete(identifier: String) -> Result<()> {
    let mut trackers = Trackers::new()?;

    let row = match trackers.resolve(&identifier)? {
        Some(row) => row,
        None => {
            msg_error!(Message::TrackerNotFound(identifier));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTracker(row.tracker.title.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        trackers.delete(row.tracker.id.unwrap_or_default())?;
        msg_success!(Message::TrackerDeleted(row.tracker.title));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_pin(identifier: String) -> Result<()> {
    let mut trackers = Trackers::new()?;

    let row = match trackers.resolve(&identifier)? {
        Some(row) => row,
        None => {
            msg_error!(Message::TrackerNotFound(identifier));
            return Ok(());
        }
    };

    if trackers.pin(row.tracker.id.unwrap_or_default())? {
        msg_success!(Message::TrackerPinned(row.tracker.title));
    } else {
        msg_info!(Message::TrackerAlreadyPinned(row.tracker.title));
    }
    Ok(())
}

fn handle_unpin(identifier: String) -> Result<()> {
    let mut trackers = Trackers::new()?;

    let row = match trackers.resolve(&identifier)? {
        Some(row) => row,
        None => {
            msg_error!(Message::TrackerNotFound(identifier));
            return Ok(());
        }
    };

    if trackers.unpin(row.tracker.id.unwrap_or_default())? {
        msg_success!(Message::TrackerUnpinned(row.tracker.title));
    } else {
        msg_info!(Message::TrackerNotPinned(row.tracker.title));
    }
    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Create tracker", "Delete tracker", "Pin tracker", "Unpin tracker"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTrackerAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => {
            let title: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTrackerTitle.to_string())
                .interact_text()?;
            let category: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTrackerCategory.to_string())
                .default(Config::read().unwrap_or_default().default_category())
                .interact_text()?;
            let kinds = vec![KindArg::Habit, KindArg::Event];
            let kind_index = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTrackerKind.to_string())
                .items(&["Habit", "Irregular event"])
                .default(0)
                .interact()?;
            let kind = kinds[kind_index];
            let schedule: String = if kind == KindArg::Habit {
                Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptSchedule.to_string())
                    .default("every-day".to_string())
                    .interact_text()?
            } else {
                String::new()
            };
            let color: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptColor.to_string())
                .default("1".to_string())
                .interact_text()?;
            let emoji: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptEmoji.to_string())
                .default("1".to_string())
                .interact_text()?;
            let schedule = if schedule.is_empty() { None } else { Some(schedule) };
            handle_create(title, Some(category), kind, schedule, color, emoji)
        }
        1 => {
            let tracker: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTrackerTitle.to_string())
                .interact_text()?;
            handle_delete(tracker)
        }
        2 => {
            let tracker: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTrackerTitle.to_string())
                .interact_text()?;
            handle_pin(tracker)
        }
        3 => {
            let tracker: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTrackerTitle.to_string())
                .interact_text()?;
            handle_unpin(tracker)
        }
        _ => Ok(()),
    }
}
