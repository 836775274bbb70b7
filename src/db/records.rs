use crate::db::db::Db;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::collections::HashSet;

const INSERT_RECORD: &str = "INSERT INTO completions (tracker_id, date) VALUES (?1, ?2)";
const DELETE_RECORD: &str = "DELETE FROM completions WHERE tracker_id = ?1 AND date = ?2";
const COUNT_RECORD: &str = "SELECT COUNT(*) FROM completions WHERE tracker_id = ?1 AND date = ?2";
const COUNT_FOR_TRACKER: &str = "SELECT COUNT(*) FROM completions WHERE tracker_id = ?1";
const SELECT_IDS_ON_DATE: &str = "SELECT tracker_id FROM completions WHERE date = ?1";
const SELECT_EVER_IDS: &str = "SELECT DISTINCT tracker_id FROM completions";

/// Day-granular completion marks, at most one per (tracker, day).
///
/// The one-per-day invariant is enforced proactively by an existence
/// check before insert rather than by a uniqueness constraint.
pub struct CompletionRecords {
    conn: Connection,
}

impl CompletionRecords {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Mark a tracker complete on a date. Returns false when the record
    /// already existed.
    pub fn add(&mut self, tracker_id: i64, date: NaiveDate) -> Result<bool> {
        if self.exists(tracker_id, date)? {
            return Ok(false);
        }
        self.conn.execute(INSERT_RECORD, params![tracker_id, Self::date_str(date)])?;
        Ok(true)
    }

    /// Remove the completion mark for a date. Returns false when there
    /// was nothing to remove.
    pub fn remove(&mut self, tracker_id: i64, date: NaiveDate) -> Result<bool> {
        let affected = self.conn.execute(DELETE_RECORD, params![tracker_id, Self::date_str(date)])?;
        Ok(affected > 0)
    }

    pub fn exists(&mut self, tracker_id: i64, date: NaiveDate) -> Result<bool> {
        let count: i64 = self.conn.query_row(COUNT_RECORD, params![tracker_id, Self::date_str(date)], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Total completions ever recorded for one tracker.
    pub fn count_for(&mut self, tracker_id: i64) -> Result<u32> {
        let count: i64 = self.conn.query_row(COUNT_FOR_TRACKER, params![tracker_id], |row| row.get(0))?;
        Ok(count as u32)
    }

    /// Ids of every tracker completed on the given date.
    pub fn completed_on(&mut self, date: NaiveDate) -> Result<HashSet<i64>> {
        let mut stmt = self.conn.prepare(SELECT_IDS_ON_DATE)?;
        let id_iter = stmt.query_map(params![Self::date_str(date)], |row| row.get(0))?;

        let mut ids = HashSet::new();
        for id in id_iter {
            ids.insert(id?);
        }
        Ok(ids)
    }

    /// Ids of every tracker with at least one completion on any date.
    pub fn ever_completed_ids(&mut self) -> Result<HashSet<i64>> {
        let mut stmt = self.conn.prepare(SELECT_EVER_IDS)?;
        let id_iter = stmt.query_map([], |row| row.get(0))?;

        let mut ids = HashSet::new();
        for id in id_iter {
            ids.insert(id?);
        }
        Ok(ids)
    }

    fn date_str(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}
