#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use habita::db::categories::PINNED_CATEGORY_TITLE;
    use habita::libs::filter::FilterKind;
    use habita::libs::list::{ListDiff, RowRef, TrackerList};
    use habita::libs::palette;
    use habita::libs::schedule::Schedule;
    use habita::libs::tracker::{Tracker, TrackerKind};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;
    use std::sync::{Mutex, MutexGuard};
    use test_context::{test_context, TestContext};

    // Tests rewire HOME/LOCALAPPDATA, which the whole process shares;
    // the lock runs them one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct DiffTestContext {
        _temp_dir: TempDir,
        _env_lock: MutexGuard<'static, ()>,
    }

    impl TestContext for DiffTestContext {
        fn setup() -> Self {
            let env_lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            DiffTestContext {
                _temp_dir: temp_dir,
                _env_lock: env_lock,
            }
        }
    }

    fn habit(title: &str) -> Tracker {
        Tracker::new(title, palette::COLORS[0], palette::EMOJIS[0], Schedule::every_day(), TrackerKind::Habit)
    }

    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn find_row(list: &TrackerList, title: &str) -> RowRef {
        for (section_index, section) in list.sections().iter().enumerate() {
            for (row_index, row) in section.rows.iter().enumerate() {
                if row.tracker.title == title {
                    return RowRef {
                        section: section_index,
                        row: row_index,
                    };
                }
            }
        }
        panic!("row '{}' not visible", title);
    }

    fn observe(list: &mut TrackerList) -> Rc<RefCell<Vec<ListDiff>>> {
        let captured: Rc<RefCell<Vec<ListDiff>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&captured);
        list.subscribe(Box::new(move |diff| sink.borrow_mut().push(diff.clone())));
        captured
    }

    #[test_context(DiffTestContext)]
    #[test]
    fn test_insert_produces_section_and_row(_ctx: &mut DiffTestContext) {
        let mut list = TrackerList::new().unwrap();
        let captured = observe(&mut list);

        list.apply_filter(FilterKind::All, wednesday(), "").unwrap();
        assert!(captured.borrow().last().unwrap().is_empty());

        list.add_tracker("Fitness", &habit("Run")).unwrap();
        let diff = captured.borrow().last().unwrap().clone();
        assert_eq!(diff.inserted_sections, vec![0]);
        assert_eq!(diff.inserted_rows, vec![RowRef { section: 0, row: 0 }]);
        assert!(diff.deleted_rows.is_empty());

        // A second tracker in the same category adds only a row
        list.add_tracker("Fitness", &habit("Bike")).unwrap();
        let diff = captured.borrow().last().unwrap().clone();
        assert!(diff.inserted_sections.is_empty());
        assert_eq!(diff.inserted_rows, vec![RowRef { section: 0, row: 0 }]);
    }

    #[test_context(DiffTestContext)]
    #[test]
    fn test_completion_produces_update(_ctx: &mut DiffTestContext) {
        let mut list = TrackerList::new().unwrap();
        list.add_tracker("Fitness", &habit("Run")).unwrap();
        list.apply_filter(FilterKind::All, wednesday(), "").unwrap();
        let captured = observe(&mut list);

        let run = find_row(&list, "Run");
        list.change_completion(run, true).unwrap();

        let diff = captured.borrow().last().unwrap().clone();
        assert_eq!(diff.updated_rows, vec![run]);
        assert!(diff.inserted_rows.is_empty());
        assert!(diff.moved_rows.is_empty());
    }

    #[test_context(DiffTestContext)]
    #[test]
    fn test_pin_produces_move_into_new_section(_ctx: &mut DiffTestContext) {
        let mut list = TrackerList::new().unwrap();
        list.add_tracker("Fitness", &habit("Run")).unwrap();
        list.add_tracker("Fitness", &habit("Bike")).unwrap();
        list.apply_filter(FilterKind::All, wednesday(), "").unwrap();
        let captured = observe(&mut list);

        let bike = find_row(&list, "Bike");
        assert!(list.pin_tracker(bike).unwrap());

        let diff = captured.borrow().last().unwrap().clone();
        // The Pinned section appeared at the top and Bike moved into it
        assert_eq!(diff.inserted_sections, vec![0]);
        assert_eq!(list.sections()[0].title, PINNED_CATEGORY_TITLE);
        assert_eq!(diff.moved_rows, vec![(RowRef { section: 0, row: 0 }, RowRef { section: 0, row: 0 })]);
        assert!(diff.deleted_sections.is_empty());
    }

    #[test_context(DiffTestContext)]
    #[test]
    fn test_delete_produces_deleted_row_and_section(_ctx: &mut DiffTestContext) {
        let mut list = TrackerList::new().unwrap();
        list.add_tracker("Fitness", &habit("Run")).unwrap();
        list.add_tracker("Zen", &habit("Meditate")).unwrap();
        list.apply_filter(FilterKind::All, wednesday(), "").unwrap();
        let captured = observe(&mut list);

        let run = find_row(&list, "Run");
        list.delete_tracker(run).unwrap();

        let diff = captured.borrow().last().unwrap().clone();
        assert_eq!(diff.deleted_rows, vec![run]);
        // Fitness emptied out and its section went with it
        assert_eq!(diff.deleted_sections, vec![0]);
        assert_eq!(list.sections().len(), 1);
        assert_eq!(list.sections()[0].title, "Zen");
    }

    #[test_context(DiffTestContext)]
    #[test]
    fn test_filter_change_produces_row_removal(_ctx: &mut DiffTestContext) {
        let mut list = TrackerList::new().unwrap();
        list.add_tracker("Fitness", &habit("Run")).unwrap();
        list.apply_filter(FilterKind::Uncompleted, wednesday(), "").unwrap();
        assert_eq!(list.sections().len(), 1);
        let captured = observe(&mut list);

        // Completing under the Uncompleted filter removes the row
        let run = find_row(&list, "Run");
        list.change_completion(run, true).unwrap();

        let diff = captured.borrow().last().unwrap().clone();
        assert_eq!(diff.deleted_rows, vec![run]);
        assert_eq!(diff.deleted_sections, vec![0]);
        assert!(list.sections().is_empty());
    }
}
