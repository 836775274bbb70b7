//! Display implementation for application messages.
//!
//! All user-facing text lives here, keyed by the `Message` enum, so the
//! wording stays in one place and call sites stay type-safe.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TRACKER MESSAGES ===
            Message::TrackerCreated(title) => format!("Tracker '{}' created", title),
            Message::TrackerUpdated(title) => format!("Tracker '{}' updated", title),
            Message::TrackerDeleted(title) => format!("Tracker '{}' deleted", title),
            Message::TrackerNotFound(id) => format!("Tracker '{}' not found", id),
            Message::TrackerPinned(title) => format!("Tracker '{}' pinned", title),
            Message::TrackerUnpinned(title) => format!("Tracker '{}' unpinned", title),
            Message::TrackerAlreadyPinned(title) => format!("Tracker '{}' is already pinned", title),
            Message::TrackerNotPinned(title) => format!("Tracker '{}' is not pinned", title),
            Message::TrackerTitleEmpty => "Tracker title must not be empty".to_string(),
            Message::HabitScheduleEmpty(title) => format!("Habit '{}' needs at least one scheduled weekday", title),
            Message::EventScheduleNotEmpty(title) => format!("Irregular event '{}' must not carry a weekly schedule", title),
            Message::ColorNotInPalette(color) => format!("Color '{}' is not in the palette (pick an index 1-18 or a palette value)", color),
            Message::EmojiNotInPalette(emoji) => format!("Emoji '{}' is not in the palette (pick an index 1-18 or a palette value)", emoji),
            Message::ConfirmDeleteTracker(title) => format!("Delete tracker '{}' and all its completions?", title),
            Message::SelectTrackerAction => "Select action".to_string(),
            Message::PromptTrackerTitle => "Tracker title".to_string(),
            Message::PromptTrackerCategory => "Category".to_string(),
            Message::PromptTrackerKind => "Kind".to_string(),
            Message::PromptSchedule => "Schedule (e.g. mon,wed,fri / every-day / weekdays / weekend)".to_string(),
            Message::PromptColor => "Color (palette index 1-18)".to_string(),
            Message::PromptEmoji => "Emoji (palette index 1-18)".to_string(),
            Message::NothingToTrack => "Nothing to track yet".to_string(),

            // === COMPLETION MESSAGES ===
            Message::CompletionMarked(title, date) => format!("'{}' marked complete for {}", title, date),
            Message::CompletionUnmarked(title, date) => format!("'{}' unmarked for {}", title, date),
            Message::AlreadyCompleted(title, date) => format!("'{}' is already completed on {}", title, date),
            Message::NotCompletedYet(title, date) => format!("'{}' has no completion on {}", title, date),
            Message::FutureDateRejected(date) => format!("Cannot record a completion for the future date {}", date),

            // === CATEGORY MESSAGES ===
            Message::CategoryCreated(title) => format!("Category '{}' created", title),
            Message::CategoryExists(title) => format!("Category '{}' already exists", title),
            Message::CategoryRenamed(old, new) => format!("Category '{}' renamed to '{}'", old, new),
            Message::CategoryDeleted(title) => format!("Category '{}' deleted", title),
            Message::CategoryNotFound(title) => format!("Category '{}' not found", title),
            Message::CategoryNotEmpty(title, count) => format!("Category '{}' still holds {} tracker(s); move or delete them first", title, count),
            Message::PinnedCategoryImmutable => "The Pinned category cannot be renamed or deleted".to_string(),
            Message::ConfirmDeleteCategory(title) => format!("Delete category '{}'?", title),
            Message::CategoryListHeader => "📂 Categories".to_string(),
            Message::NoCategoriesFound => "No categories yet".to_string(),
            Message::PromptCategoryTitle => "Category title".to_string(),
            Message::SelectCategoryAction => "Select action".to_string(),

            // === LIST MESSAGES ===
            Message::ListHeader(filter, date) => format!("📋 {} for {}", filter, date),
            Message::InvalidDateInput(date) => format!("Invalid date '{}', expected YYYY-MM-DD", date),
            Message::InvalidWeekDay(day) => format!("Unknown weekday '{}'", day),

            // === STATISTICS MESSAGES ===
            Message::StatisticsHeader => "📈 Statistics".to_string(),
            Message::NoStatisticsYet => "Nothing to analyze yet".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::PromptDefaultCategory => "Default category for new trackers".to_string(),
            Message::OnboardingCompleted => "Setup complete, happy tracking".to_string(),

            // === MIGRATION MESSAGES ===
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationHistory => "Migration history".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations applied".to_string(),
            #[cfg(debug_assertions)]
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            #[cfg(debug_assertions)]
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            #[cfg(debug_assertions)]
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::StoreOperationFailed(error) => format!("Store operation failed: {}", error),
            Message::Custom(text) => text.clone(),
        };
        write!(f, "{}", text)
    }
}
