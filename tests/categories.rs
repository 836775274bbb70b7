#[cfg(test)]
mod tests {
    use habita::db::categories::{Categories, PINNED_CATEGORY_TITLE};
    use habita::db::trackers::Trackers;
    use habita::libs::palette;
    use habita::libs::schedule::Schedule;
    use habita::libs::tracker::{Tracker, TrackerKind};
    use tempfile::TempDir;
    use std::sync::{Mutex, MutexGuard};
    use test_context::{test_context, TestContext};

    // Tests rewire HOME/LOCALAPPDATA, which the whole process shares;
    // the lock runs them one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct CategoryTestContext {
        _temp_dir: TempDir,
        _env_lock: MutexGuard<'static, ()>,
    }

    impl TestContext for CategoryTestContext {
        fn setup() -> Self {
            let env_lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CategoryTestContext {
                _temp_dir: temp_dir,
                _env_lock: env_lock,
            }
        }
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_fetch_or_create_is_unique_per_title(_ctx: &mut CategoryTestContext) {
        let mut categories = Categories::new().unwrap();

        let first = categories.fetch_or_create("Fitness").unwrap();
        let second = categories.fetch_or_create("Fitness").unwrap();
        assert_eq!(first.id, second.id);

        // Title match is case-sensitive; a different casing is a new category
        let other = categories.fetch_or_create("fitness").unwrap();
        assert_ne!(first.id, other.id);

        assert_eq!(categories.list().unwrap().len(), 2);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_pinned_category_is_singleton(_ctx: &mut CategoryTestContext) {
        let mut categories = Categories::new().unwrap();

        let first = categories.fetch_or_create_pinned().unwrap();
        let second = categories.fetch_or_create_pinned().unwrap();
        assert_eq!(first.id, second.id);
        assert!(first.is_pinned);
        assert_eq!(first.title, PINNED_CATEGORY_TITLE);

        let pinned_count = categories.list().unwrap().iter().filter(|c| c.is_pinned).count();
        assert_eq!(pinned_count, 1);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_list_orders_pinned_first_then_alphabetical(_ctx: &mut CategoryTestContext) {
        let mut categories = Categories::new().unwrap();

        categories.fetch_or_create("Zen").unwrap();
        categories.fetch_or_create("Alpha").unwrap();
        categories.fetch_or_create_pinned().unwrap();
        categories.fetch_or_create("Fitness").unwrap();

        let titles: Vec<String> = categories.list().unwrap().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec![PINNED_CATEGORY_TITLE, "Alpha", "Fitness", "Zen"]);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_rename_and_delete(_ctx: &mut CategoryTestContext) {
        let mut categories = Categories::new().unwrap();

        let category = categories.fetch_or_create("Fitnes").unwrap();
        let id = category.id.unwrap();

        categories.rename(id, "Fitness").unwrap();
        assert!(categories.get_by_title("Fitnes").unwrap().is_none());
        assert_eq!(categories.get_by_title("Fitness").unwrap().unwrap().id, Some(id));

        categories.delete(id).unwrap();
        assert!(categories.get_by_id(id).unwrap().is_none());
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_tracker_count(_ctx: &mut CategoryTestContext) {
        let mut categories = Categories::new().unwrap();
        let mut trackers = Trackers::new().unwrap();

        let tracker = Tracker::new("Run", palette::COLORS[0], palette::EMOJIS[0], Schedule::every_day(), TrackerKind::Habit);
        trackers.insert("Fitness", &tracker).unwrap();

        let category = categories.get_by_title("Fitness").unwrap().unwrap();
        assert_eq!(categories.tracker_count(category.id.unwrap()).unwrap(), 1);

        let empty = categories.fetch_or_create("Empty").unwrap();
        assert_eq!(categories.tracker_count(empty.id.unwrap()).unwrap(), 0);
    }
}
