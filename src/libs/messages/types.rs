#[derive(Debug, Clone)]
pub enum Message {
    // === TRACKER MESSAGES ===
    TrackerCreated(String),
    TrackerUpdated(String),
    TrackerDeleted(String),
    TrackerNotFound(String),
    TrackerPinned(String),
    TrackerUnpinned(String),
    TrackerAlreadyPinned(String),
    TrackerNotPinned(String),
    TrackerTitleEmpty,
    HabitScheduleEmpty(String),
    EventScheduleNotEmpty(String),
    ColorNotInPalette(String),
    EmojiNotInPalette(String),
    ConfirmDeleteTracker(String),
    SelectTrackerAction,
    PromptTrackerTitle,
    PromptTrackerCategory,
    PromptTrackerKind,
    PromptSchedule,
    PromptColor,
    PromptEmoji,
    NothingToTrack,

    // === COMPLETION MESSAGES ===
    CompletionMarked(String, String),   // title, date
    CompletionUnmarked(String, String), // title, date
    AlreadyCompleted(String, String),   // title, date
    NotCompletedYet(String, String),    // title, date
    FutureDateRejected(String),         // date

    // === CATEGORY MESSAGES ===
    CategoryCreated(String),
    CategoryExists(String),
    CategoryRenamed(String, String), // old, new
    CategoryDeleted(String),
    CategoryNotFound(String),
    CategoryNotEmpty(String, usize), // title, tracker count
    PinnedCategoryImmutable,
    ConfirmDeleteCategory(String),
    CategoryListHeader,
    NoCategoriesFound,
    PromptCategoryTitle,
    SelectCategoryAction,

    // === LIST MESSAGES ===
    ListHeader(String, String), // filter label, date
    InvalidDateInput(String),
    InvalidWeekDay(String),

    // === STATISTICS MESSAGES ===
    StatisticsHeader,
    NoStatisticsYet,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    PromptDefaultCategory,
    OnboardingCompleted,

    // === MIGRATION MESSAGES ===
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    #[cfg(debug_assertions)]
    NothingToRollback,
    #[cfg(debug_assertions)]
    RollingBack(u32, u32),
    #[cfg(debug_assertions)]
    RollbackCompleted(u32),

    // === GENERIC MESSAGES ===
    OperationCancelled,
    StoreOperationFailed(String),
    Custom(String),
}
