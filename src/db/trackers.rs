use crate::db::db::Db;
use crate::libs::error::AppError;
use crate::libs::schedule::Schedule;
use crate::libs::tracker::{Tracker, TrackerKind};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_TRACKER: &str = "INSERT INTO trackers (title, color, emoji, schedule, kind, category_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_TRACKER: &str = "UPDATE trackers SET title = ?2, color = ?3, emoji = ?4, schedule = ?5, kind = ?6, category_id = ?7, pinned_from = NULL WHERE id = ?1";
const DELETE_TRACKER: &str = "DELETE FROM trackers WHERE id = ?1";
const SELECT_TRACKERS: &str = "
    SELECT t.id, t.title, t.color, t.emoji, t.schedule, t.kind, t.category_id, t.pinned_from, c.title, c.is_pinned
    FROM trackers t
    JOIN categories c ON c.id = t.category_id
";
const ORDER_BY_SECTION: &str = "ORDER BY c.is_pinned DESC, c.title, t.title";
const SET_PIN: &str = "UPDATE trackers SET pinned_from = ?2, category_id = ?3 WHERE id = ?1";
const SET_UNPIN: &str = "UPDATE trackers SET category_id = pinned_from, pinned_from = NULL WHERE id = ?1";
const SELECT_CATEGORY_BY_TITLE: &str = "SELECT id FROM categories WHERE title = ?1";
const SELECT_PINNED_CATEGORY: &str = "SELECT id FROM categories WHERE is_pinned = 1";
const INSERT_CATEGORY: &str = "INSERT INTO categories (title, is_pinned) VALUES (?1, ?2)";

/// A tracker joined with the category it currently belongs to.
#[derive(Debug, Clone)]
pub struct TrackerRow {
    pub tracker: Tracker,
    pub category_id: i64,
    pub category_title: String,
    pub category_pinned: bool,
    pub pinned_from: Option<i64>,
}

impl TrackerRow {
    pub fn is_pinned(&self) -> bool {
        self.category_pinned
    }
}

pub struct Trackers {
    conn: Connection,
}

impl Trackers {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Attach a new tracker to the category with the given title,
    /// creating the category on first use. Returns the assigned id.
    pub fn insert(&mut self, category_title: &str, tracker: &Tracker) -> Result<i64> {
        let category_id = self.fetch_or_create_category(category_title)?;
        self.conn.execute(
            INSERT_TRACKER,
            params![
                tracker.title,
                tracker.color,
                tracker.emoji,
                tracker.schedule.to_storage(),
                tracker.kind.to_db(),
                category_id
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Overwrite an existing tracker's fields and re-parent it to the
    /// (possibly new) category. Re-parenting resets pin bookkeeping.
    ///
    /// The one typed failure of the persistence layer: a missing id
    /// surfaces as [`AppError::TrackerNotFound`].
    pub fn update(&mut self, category_title: &str, tracker: &Tracker) -> Result<()> {
        let id = tracker.id.ok_or(AppError::TrackerNotFound(0))?;
        if self.get(id)?.is_none() {
            return Err(AppError::TrackerNotFound(id).into());
        }
        let category_id = self.fetch_or_create_category(category_title)?;
        self.conn.execute(
            UPDATE_TRACKER,
            params![
                id,
                tracker.title,
                tracker.color,
                tracker.emoji,
                tracker.schedule.to_storage(),
                tracker.kind.to_db(),
                category_id
            ],
        )?;
        Ok(())
    }

    /// Delete a tracker; its completion records cascade with it.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        self.conn.execute(DELETE_TRACKER, params![id])?;
        Ok(())
    }

    pub fn get(&mut self, id: i64) -> Result<Option<TrackerRow>> {
        let sql = format!("{} WHERE t.id = ?1", SELECT_TRACKERS);
        self.conn.query_row(&sql, params![id], Self::map_row).optional().map_err(Into::into)
    }

    /// Resolve a user-supplied identifier: a numeric id or an exact
    /// title.
    pub fn resolve(&mut self, identifier: &str) -> Result<Option<TrackerRow>> {
        if let Ok(id) = identifier.parse::<i64>() {
            return self.get(id);
        }
        let sql = format!("{} WHERE t.title = ?1", SELECT_TRACKERS);
        self.conn.query_row(&sql, params![identifier], Self::map_row).optional().map_err(Into::into)
    }

    /// Every tracker, ordered for the sectioned list: the Pinned
    /// category first, then categories and trackers alphabetically.
    pub fn fetch_all(&mut self) -> Result<Vec<TrackerRow>> {
        let sql = format!("{} {}", SELECT_TRACKERS, ORDER_BY_SECTION);
        let mut stmt = self.conn.prepare(&sql)?;
        let tracker_iter = stmt.query_map([], Self::map_row)?;

        let mut rows = Vec::new();
        for row in tracker_iter {
            rows.push(row?);
        }
        Ok(rows)
    }

    /// Move a tracker into the Pinned category, remembering where it
    /// came from. Pinning an already-pinned tracker is a no-op.
    /// Returns whether anything changed.
    pub fn pin(&mut self, id: i64) -> Result<bool> {
        let row = self.get(id)?.ok_or(AppError::TrackerNotFound(id))?;
        if row.is_pinned() {
            return Ok(false);
        }
        let pinned_id = self.fetch_or_create_pinned_category()?;
        self.conn.execute(SET_PIN, params![id, row.category_id, pinned_id])?;
        Ok(true)
    }

    /// Restore a pinned tracker to its remembered category. Unpinning
    /// a tracker with no remembered category is a no-op. Returns
    /// whether anything changed.
    pub fn unpin(&mut self, id: i64) -> Result<bool> {
        let row = self.get(id)?.ok_or(AppError::TrackerNotFound(id))?;
        if row.pinned_from.is_none() {
            return Ok(false);
        }
        self.conn.execute(SET_UNPIN, params![id])?;
        Ok(true)
    }

    fn fetch_or_create_category(&mut self, title: &str) -> Result<i64> {
        let existing: Option<i64> = self.conn.query_row(SELECT_CATEGORY_BY_TITLE, params![title], |row| row.get(0)).optional()?;
        if let Some(id) = existing {
            return Ok(id);
        }
        self.conn.execute(INSERT_CATEGORY, params![title, false])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn fetch_or_create_pinned_category(&mut self) -> Result<i64> {
        let existing: Option<i64> = self.conn.query_row(SELECT_PINNED_CATEGORY, [], |row| row.get(0)).optional()?;
        if let Some(id) = existing {
            return Ok(id);
        }
        self.conn.execute(INSERT_CATEGORY, params![crate::db::categories::PINNED_CATEGORY_TITLE, true])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<TrackerRow> {
        let kind_raw: i64 = row.get(5)?;
        let kind = TrackerKind::from_db(kind_raw).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Integer, format!("invalid tracker kind: {}", kind_raw).into())
        })?;
        Ok(TrackerRow {
            tracker: Tracker {
                id: row.get(0)?,
                title: row.get(1)?,
                color: row.get(2)?,
                emoji: row.get(3)?,
                schedule: Schedule::from_storage(&row.get::<_, String>(4)?),
                kind,
            },
            category_id: row.get(6)?,
            pinned_from: row.get(7)?,
            category_title: row.get(8)?,
            category_pinned: row.get(9)?,
        })
    }
}
