//! The live, filtered, sectioned tracker list.
//!
//! `TrackerList` is the query side of the persistence layer: it applies
//! a filter kind, reference date, and search text to the tracker set,
//! groups the visible trackers into sections by category (Pinned first,
//! then alphabetical), and tells registered subscribers exactly what
//! changed between consecutive snapshots as a structured [`ListDiff`],
//! so a consumer can update incrementally instead of reloading.
//!
//! Rows are identified by tracker id and sections by category title;
//! the diff reports a row whose section changed as a move, and a row
//! whose content changed in place as an update.

use crate::db::records::CompletionRecords;
use crate::db::trackers::Trackers;
use crate::libs::error::AppError;
use crate::libs::filter::{matches_search, CompletionFacts, FilterKind};
use crate::libs::statistics::StatisticsService;
use crate::libs::tracker::Tracker;
use crate::libs::weekday::WeekDay;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::collections::{HashMap, HashSet};

/// Position of one row in the sectioned snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RowRef {
    pub section: usize,
    pub row: usize,
}

/// One visible tracker with the completion facts a renderer needs.
#[derive(Debug, Clone)]
pub struct Row {
    pub tracker: Tracker,
    pub category_title: String,
    pub is_pinned: bool,
    pub completed_on_date: bool,
    pub total_completions: u32,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub rows: Vec<Row>,
}

/// Read-only snapshot for rendering one row.
#[derive(Debug, Clone)]
pub struct RowStatus {
    pub tracker: Tracker,
    pub total_completions: u32,
    pub is_completed: bool,
    pub is_pinned: bool,
}

/// Structured difference between two consecutive snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDiff {
    pub inserted_sections: Vec<usize>,
    pub deleted_sections: Vec<usize>,
    pub inserted_rows: Vec<RowRef>,
    pub deleted_rows: Vec<RowRef>,
    pub updated_rows: Vec<RowRef>,
    pub moved_rows: Vec<(RowRef, RowRef)>,
}

impl ListDiff {
    pub fn is_empty(&self) -> bool {
        self.inserted_sections.is_empty()
            && self.deleted_sections.is_empty()
            && self.inserted_rows.is_empty()
            && self.deleted_rows.is_empty()
            && self.updated_rows.is_empty()
            && self.moved_rows.is_empty()
    }
}

pub type ListObserver = Box<dyn FnMut(&ListDiff)>;

pub struct TrackerList {
    trackers: Trackers,
    records: CompletionRecords,
    statistics: StatisticsService,
    filter: FilterKind,
    date: NaiveDate,
    search: String,
    sections: Vec<Section>,
    observers: Vec<ListObserver>,
}

impl TrackerList {
    pub fn new() -> Result<Self> {
        let mut list = Self {
            trackers: Trackers::new()?,
            records: CompletionRecords::new()?,
            statistics: StatisticsService::load()?,
            filter: FilterKind::Today,
            date: Local::now().date_naive(),
            search: String::new(),
            sections: Vec::new(),
            observers: Vec::new(),
        };
        list.sections = list.build_sections()?;
        Ok(list)
    }

    /// Register a subscriber for snapshot diffs. Observers are invoked
    /// synchronously after every re-evaluation.
    pub fn subscribe(&mut self, observer: ListObserver) {
        self.observers.push(observer);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The reference date completions are read and written against.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Re-evaluate the visible set for a filter, date, and search text.
    /// The Today filter always pins the date to the current day.
    pub fn apply_filter(&mut self, filter: FilterKind, date: NaiveDate, search: &str) -> Result<ListDiff> {
        self.filter = filter;
        self.date = match filter {
            FilterKind::Today => Local::now().date_naive(),
            _ => date,
        };
        self.search = search.to_string();
        self.refresh()
    }

    /// Rebuild the snapshot with the current parameters and notify
    /// subscribers of the difference.
    pub fn refresh(&mut self) -> Result<ListDiff> {
        let new_sections = self.build_sections()?;
        let diff = Self::diff(&self.sections, &new_sections);
        self.sections = new_sections;
        for observer in &mut self.observers {
            observer(&diff);
        }
        Ok(diff)
    }

    /// Read-only completion snapshot for one row.
    pub fn completion_status(&self, row_ref: RowRef) -> Result<RowStatus> {
        let row = self.row(row_ref)?;
        Ok(RowStatus {
            tracker: row.tracker.clone(),
            total_completions: row.total_completions,
            is_completed: row.completed_on_date,
            is_pinned: row.is_pinned,
        })
    }

    /// Add or remove the completion record for the row at the current
    /// reference date. At most one record exists per (tracker, day);
    /// a redundant toggle is a no-op that leaves statistics untouched.
    pub fn change_completion(&mut self, row_ref: RowRef, completed: bool) -> Result<ListDiff> {
        let tracker_id = self.tracker_id(row_ref)?;
        let date = self.date;
        if completed {
            if self.records.add(tracker_id, date)? {
                self.statistics.on_completion(date)?;
            }
        } else if self.records.remove(tracker_id, date)? {
            self.statistics.on_uncompletion(date)?;
        }
        self.refresh()
    }

    /// Insert a new tracker and refresh the snapshot.
    pub fn add_tracker(&mut self, category_title: &str, tracker: &Tracker) -> Result<i64> {
        let id = self.trackers.insert(category_title, tracker)?;
        self.refresh()?;
        Ok(id)
    }

    /// Update an existing tracker; surfaces the typed not-found error.
    pub fn update_tracker(&mut self, category_title: &str, tracker: &Tracker) -> Result<()> {
        self.trackers.update(category_title, tracker)?;
        self.refresh()?;
        Ok(())
    }

    /// Remove the tracker at the given row together with its records.
    pub fn delete_tracker(&mut self, row_ref: RowRef) -> Result<ListDiff> {
        let tracker_id = self.tracker_id(row_ref)?;
        self.trackers.delete(tracker_id)?;
        self.refresh()
    }

    /// Pin the tracker at the given row; no-op when already pinned.
    pub fn pin_tracker(&mut self, row_ref: RowRef) -> Result<bool> {
        let tracker_id = self.tracker_id(row_ref)?;
        let changed = self.trackers.pin(tracker_id)?;
        if changed {
            self.refresh()?;
        }
        Ok(changed)
    }

    /// Unpin the tracker at the given row; no-op when it was never
    /// pinned.
    pub fn unpin_tracker(&mut self, row_ref: RowRef) -> Result<bool> {
        let tracker_id = self.tracker_id(row_ref)?;
        let changed = self.trackers.unpin(tracker_id)?;
        if changed {
            self.refresh()?;
        }
        Ok(changed)
    }

    fn row(&self, row_ref: RowRef) -> Result<&Row> {
        self.sections
            .get(row_ref.section)
            .and_then(|section| section.rows.get(row_ref.row))
            .ok_or_else(|| AppError::InvalidRowRef(row_ref.section, row_ref.row).into())
    }

    fn tracker_id(&self, row_ref: RowRef) -> Result<i64> {
        self.row(row_ref)?.tracker.id.ok_or_else(|| AppError::TrackerNotFound(0).into())
    }

    /// Evaluate the filter over all trackers and group the survivors
    /// into sections. `fetch_all` already orders by pinned-first, then
    /// category title, then tracker title, so grouping preserves the
    /// section order.
    fn build_sections(&mut self) -> Result<Vec<Section>> {
        let weekday = WeekDay::from_date(self.date);
        let completed_on_date = self.records.completed_on(self.date)?;
        let ever_completed = self.records.ever_completed_ids()?;

        let mut sections: Vec<Section> = Vec::new();
        for tracker_row in self.trackers.fetch_all()? {
            let Some(id) = tracker_row.tracker.id else { continue };
            let facts = CompletionFacts {
                completed_on_date: completed_on_date.contains(&id),
                completed_ever: ever_completed.contains(&id),
            };
            if !self.filter.is_visible(&tracker_row.tracker, weekday, facts) {
                continue;
            }
            if !matches_search(&tracker_row.tracker, &self.search) {
                continue;
            }

            let row = Row {
                total_completions: self.records.count_for(id)?,
                completed_on_date: facts.completed_on_date,
                is_pinned: tracker_row.is_pinned(),
                category_title: tracker_row.category_title.clone(),
                tracker: tracker_row.tracker,
            };
            match sections.last_mut() {
                Some(section) if section.title == row.category_title => section.rows.push(row),
                _ => sections.push(Section {
                    title: row.category_title.clone(),
                    rows: vec![row],
                }),
            }
        }
        Ok(sections)
    }

    /// Structured difference between two snapshots. Sections are keyed
    /// by title and rows by tracker id. A row whose section changed is
    /// a move; a row whose content changed in place is an update.
    fn diff(old: &[Section], new: &[Section]) -> ListDiff {
        let mut diff = ListDiff::default();

        let old_titles: HashSet<&str> = old.iter().map(|section| section.title.as_str()).collect();
        let new_titles: HashSet<&str> = new.iter().map(|section| section.title.as_str()).collect();
        for (index, section) in old.iter().enumerate() {
            if !new_titles.contains(section.title.as_str()) {
                diff.deleted_sections.push(index);
            }
        }
        for (index, section) in new.iter().enumerate() {
            if !old_titles.contains(section.title.as_str()) {
                diff.inserted_sections.push(index);
            }
        }

        let mut old_rows: HashMap<i64, (RowRef, &Row)> = HashMap::new();
        for (section_index, section) in old.iter().enumerate() {
            for (row_index, row) in section.rows.iter().enumerate() {
                if let Some(id) = row.tracker.id {
                    old_rows.insert(
                        id,
                        (
                            RowRef {
                                section: section_index,
                                row: row_index,
                            },
                            row,
                        ),
                    );
                }
            }
        }

        for (section_index, section) in new.iter().enumerate() {
            for (row_index, row) in section.rows.iter().enumerate() {
                let new_ref = RowRef {
                    section: section_index,
                    row: row_index,
                };
                let Some(id) = row.tracker.id else { continue };
                match old_rows.remove(&id) {
                    None => diff.inserted_rows.push(new_ref),
                    Some((old_ref, old_row)) => {
                        if old_row.category_title != row.category_title {
                            diff.moved_rows.push((old_ref, new_ref));
                        } else if Self::row_changed(old_row, row) {
                            diff.updated_rows.push(new_ref);
                        }
                    }
                }
            }
        }

        diff.deleted_rows = old_rows.into_values().map(|(old_ref, _)| old_ref).collect();
        diff.deleted_rows.sort();
        diff
    }

    fn row_changed(old: &Row, new: &Row) -> bool {
        old.tracker != new.tracker || old.completed_on_date != new.completed_on_date || old.total_completions != new.total_completions
    }
}
