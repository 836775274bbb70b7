#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use habita::libs::filter::FilterKind;
    use habita::libs::list::{RowRef, TrackerList};
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

    struct FilterTestContext {
        _temp_dir: TempDir,
        _env_lock: MutexGuard<'static, ()>,
    }

    impl TestContext for FilterTestContext {
        fn setup() -> Self {
            let env_lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            FilterTestContext {
                _temp_dir: temp_dir,
                _env_lock: env_lock,
            }
        }
    }

    fn habit(title: &str, schedule: Schedule) -> Tracker {
        Tracker::new(title, palette::COLORS[0], palette::EMOJIS[0], schedule, TrackerKind::Habit)
    }

    fn event(title: &str) -> Tracker {
        Tracker::new(title, palette::COLORS[1], palette::EMOJIS[1], Schedule::new(), TrackerKind::IrregularEvent)
    }

    fn find_row(list: &TrackerList, title: &str) -> Option<RowRef> {
        for (section_index, section) in list.sections().iter().enumerate() {
            for (row_index, row) in section.rows.iter().enumerate() {
                if row.tracker.title == title {
                    return Some(RowRef {
                        section: section_index,
                        row: row_index,
                    });
                }
            }
        }
        None
    }

    fn visible_titles(list: &TrackerList) -> Vec<String> {
        list.sections().iter().flat_map(|s| s.rows.iter().map(|r| r.tracker.title.clone())).collect()
    }

    // 2024-01-10 is a Wednesday
    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_habit_scenario_run(_ctx: &mut FilterTestContext) {
        let mut list = TrackerList::new().unwrap();
        list.add_tracker("Fitness", &habit("Run", Schedule::from_days([WeekDay::Monday, WeekDay::Wednesday, WeekDay::Friday])))
            .unwrap();

        list.apply_filter(FilterKind::All, wednesday(), "").unwrap();
        let row_ref = find_row(&list, "Run").expect("Run is scheduled on Wednesday");

        list.change_completion(row_ref, true).unwrap();
        let row_ref = find_row(&list, "Run").unwrap();
        let status = list.completion_status(row_ref).unwrap();
        assert!(status.is_completed);
        assert_eq!(status.total_completions, 1);

        list.change_completion(row_ref, false).unwrap();
        let row_ref = find_row(&list, "Run").unwrap();
        let status = list.completion_status(row_ref).unwrap();
        assert!(!status.is_completed);
        assert_eq!(status.total_completions, 0);

        // Thursday is off-schedule
        let thursday = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
        list.apply_filter(FilterKind::All, thursday, "").unwrap();
        assert!(find_row(&list, "Run").is_none());
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_irregular_event_scenario_dentist(_ctx: &mut FilterTestContext) {
        let mut list = TrackerList::new().unwrap();
        list.add_tracker("Health", &event("Dentist")).unwrap();

        // Visible on any date while uncompleted
        list.apply_filter(FilterKind::All, wednesday(), "").unwrap();
        let row_ref = find_row(&list, "Dentist").expect("uncompleted events stay visible");

        list.change_completion(row_ref, true).unwrap();

        // Still visible on its completion day
        assert!(find_row(&list, "Dentist").is_some());

        // Gone on any other day once completed
        let later = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        list.apply_filter(FilterKind::All, later, "").unwrap();
        assert!(find_row(&list, "Dentist").is_none());
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_completed_and_uncompleted_partition(_ctx: &mut FilterTestContext) {
        let mut list = TrackerList::new().unwrap();
        let on_schedule = Schedule::from_days([WeekDay::Wednesday]);
        list.add_tracker("Fitness", &habit("Run", on_schedule.clone())).unwrap();
        list.add_tracker("Fitness", &habit("Bike", on_schedule)).unwrap();
        list.add_tracker("Zen", &habit("Journal", Schedule::from_days([WeekDay::Thursday]))).unwrap();

        // Complete "Run" on Wednesday
        list.apply_filter(FilterKind::All, wednesday(), "").unwrap();
        let run = find_row(&list, "Run").unwrap();
        list.change_completion(run, true).unwrap();

        list.apply_filter(FilterKind::Completed, wednesday(), "").unwrap();
        let completed = visible_titles(&list);

        list.apply_filter(FilterKind::Uncompleted, wednesday(), "").unwrap();
        let uncompleted = visible_titles(&list);

        // The two filters partition the Wednesday-eligible set
        assert_eq!(completed, vec!["Run"]);
        assert_eq!(uncompleted, vec!["Bike"]);
        assert!(!completed.iter().any(|t| uncompleted.contains(t)));

        list.apply_filter(FilterKind::All, wednesday(), "").unwrap();
        let mut all = visible_titles(&list);
        all.sort();
        let mut union: Vec<String> = completed.into_iter().chain(uncompleted).collect();
        union.sort();
        assert_eq!(all, union);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_search_narrows_every_filter(_ctx: &mut FilterTestContext) {
        let mut list = TrackerList::new().unwrap();
        let schedule = Schedule::from_days([WeekDay::Wednesday]);
        list.add_tracker("Fitness", &habit("Morning run", schedule.clone())).unwrap();
        list.add_tracker("Fitness", &habit("Bike", schedule)).unwrap();

        list.apply_filter(FilterKind::All, wednesday(), "RUN").unwrap();
        assert_eq!(visible_titles(&list), vec!["Morning run"]);

        // Search never widens: an off-schedule day stays empty
        let thursday = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
        list.apply_filter(FilterKind::All, thursday, "run").unwrap();
        assert!(visible_titles(&list).is_empty());

        list.apply_filter(FilterKind::Uncompleted, wednesday(), "bike").unwrap();
        assert_eq!(visible_titles(&list), vec!["Bike"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_sections_group_by_category(_ctx: &mut FilterTestContext) {
        let mut list = TrackerList::new().unwrap();
        let schedule = Schedule::every_day();
        list.add_tracker("Zen", &habit("Meditate", schedule.clone())).unwrap();
        list.add_tracker("Fitness", &habit("Run", schedule.clone())).unwrap();
        list.add_tracker("Fitness", &habit("Bike", schedule)).unwrap();

        list.apply_filter(FilterKind::All, wednesday(), "").unwrap();
        let section_titles: Vec<&str> = list.sections().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(section_titles, vec!["Fitness", "Zen"]);
        assert_eq!(list.sections()[0].rows.len(), 2);
        // Rows are alphabetical within their section
        assert_eq!(list.sections()[0].rows[0].tracker.title, "Bike");
    }
}
