#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use habita::db::records::CompletionRecords;
    use habita::db::trackers::Trackers;
    use habita::libs::error::AppError;
    use habita::libs::palette;
    use habita::libs::schedule::Schedule;
    use habita::libs::tracker::{Tracker, TrackerKind};
    use habita::libs::weekday::WeekDay;
    use tempfile::TempDir;
    use std::sync::{Mutex, MutexGuard};
    use test_context::{test_context, TestContext};

    // Tests rewire HOME/LOCALAPPDATA, which the whole process shares;
    // the lock runs them one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct TrackerTestContext {
        _temp_dir: TempDir,
        _env_lock: MutexGuard<'static, ()>,
    }

    impl TestContext for TrackerTestContext {
        fn setup() -> Self {
            let env_lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TrackerTestContext {
                _temp_dir: temp_dir,
                _env_lock: env_lock,
            }
        }
    }

    fn habit(title: &str) -> Tracker {
        Tracker::new(
            title,
            palette::COLORS[0],
            palette::EMOJIS[0],
            Schedule::from_days([WeekDay::Monday, WeekDay::Wednesday, WeekDay::Friday]),
            TrackerKind::Habit,
        )
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_tracker_create_and_fetch(_ctx: &mut TrackerTestContext) {
        let mut trackers = Trackers::new().unwrap();

        let id = trackers.insert("Fitness", &habit("Run")).unwrap();
        assert!(id > 0);

        let row = trackers.get(id).unwrap().unwrap();
        assert_eq!(row.tracker.title, "Run");
        assert_eq!(row.tracker.kind, TrackerKind::Habit);
        assert_eq!(row.category_title, "Fitness");
        assert!(!row.is_pinned());
        assert!(row.pinned_from.is_none());

        // Resolve by id and by exact title
        assert!(trackers.resolve(&id.to_string()).unwrap().is_some());
        assert!(trackers.resolve("Run").unwrap().is_some());
        assert!(trackers.resolve("Walk").unwrap().is_none());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_tracker_update(_ctx: &mut TrackerTestContext) {
        let mut trackers = Trackers::new().unwrap();

        let id = trackers.insert("Fitness", &habit("Run")).unwrap();
        let mut updated = trackers.get(id).unwrap().unwrap().tracker;
        updated.title = "Morning run".to_string();
        updated.color = palette::COLORS[1].to_string();
        updated.emoji = palette::EMOJIS[1].to_string();
        updated.schedule = Schedule::weekdays();

        trackers.update("Health", &updated).unwrap();

        let row = trackers.get(id).unwrap().unwrap();
        assert_eq!(row.tracker.title, "Morning run");
        assert_eq!(row.tracker.color, palette::COLORS[1]);
        assert_eq!(row.tracker.schedule, Schedule::weekdays());
        // Re-parented to the new category, created on first use
        assert_eq!(row.category_title, "Health");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_tracker_update_not_found(_ctx: &mut TrackerTestContext) {
        let mut trackers = Trackers::new().unwrap();

        let mut missing = habit("Ghost");
        missing.id = Some(999);
        let err = trackers.update("Fitness", &missing).unwrap_err();

        match err.downcast_ref::<AppError>() {
            Some(AppError::TrackerNotFound(id)) => assert_eq!(*id, 999),
            other => panic!("expected TrackerNotFound, got {:?}", other),
        }
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_tracker_delete_cascades_records(_ctx: &mut TrackerTestContext) {
        let mut trackers = Trackers::new().unwrap();
        let mut records = CompletionRecords::new().unwrap();

        let id = trackers.insert("Fitness", &habit("Run")).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert!(records.add(id, date).unwrap());
        assert_eq!(records.count_for(id).unwrap(), 1);

        trackers.delete(id).unwrap();

        assert!(trackers.get(id).unwrap().is_none());
        // Completion records go with their tracker
        assert_eq!(records.count_for(id).unwrap(), 0);
        assert!(records.ever_completed_ids().unwrap().is_empty());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_fetch_all_ordering(_ctx: &mut TrackerTestContext) {
        let mut trackers = Trackers::new().unwrap();

        trackers.insert("Zen", &habit("Meditate")).unwrap();
        trackers.insert("Fitness", &habit("Run")).unwrap();
        trackers.insert("Fitness", &habit("Bike")).unwrap();

        let rows = trackers.fetch_all().unwrap();
        let titles: Vec<(&str, &str)> = rows.iter().map(|r| (r.category_title.as_str(), r.tracker.title.as_str())).collect();
        assert_eq!(titles, vec![("Fitness", "Bike"), ("Fitness", "Run"), ("Zen", "Meditate")]);
    }
}
