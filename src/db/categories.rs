use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

/// Title of the distinguished pseudo-category that surfaces pinned
/// trackers first.
pub const PINNED_CATEGORY_TITLE: &str = "Pinned";

const INSERT_CATEGORY: &str = "INSERT INTO categories (title, is_pinned) VALUES (?1, ?2)";
const UPDATE_CATEGORY_TITLE: &str = "UPDATE categories SET title = ?2 WHERE id = ?1";
const DELETE_CATEGORY: &str = "DELETE FROM categories WHERE id = ?1";
const SELECT_ALL_CATEGORIES: &str = "SELECT id, title, is_pinned, created_at FROM categories ORDER BY is_pinned DESC, title";
const SELECT_CATEGORY_BY_TITLE: &str = "SELECT id, title, is_pinned, created_at FROM categories WHERE title = ?1";
const SELECT_CATEGORY_BY_ID: &str = "SELECT id, title, is_pinned, created_at FROM categories WHERE id = ?1";
const SELECT_PINNED_CATEGORY: &str = "SELECT id, title, is_pinned, created_at FROM categories WHERE is_pinned = 1";
const COUNT_TRACKERS_IN_CATEGORY: &str = "SELECT COUNT(*) FROM trackers WHERE category_id = ?1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<i64>,
    pub title: String,
    pub is_pinned: bool,
    pub created_at: Option<String>,
}

impl Category {
    pub fn new(title: String) -> Self {
        Self {
            id: None,
            title,
            is_pinned: false,
            created_at: None,
        }
    }
}

pub struct Categories {
    conn: Connection,
}

impl Categories {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Look a category up by exact title, creating it when absent.
    ///
    /// Uniqueness per title is enforced by this lookup-before-create,
    /// which is sufficient under single-threaded access.
    pub fn fetch_or_create(&mut self, title: &str) -> Result<Category> {
        if let Some(existing) = self.get_by_title(title)? {
            return Ok(existing);
        }
        self.conn.execute(INSERT_CATEGORY, params![title, false])?;
        let id = self.conn.last_insert_rowid();
        Ok(Category {
            id: Some(id),
            title: title.to_string(),
            is_pinned: false,
            created_at: None,
        })
    }

    /// The singleton Pinned pseudo-category, created on first use.
    pub fn fetch_or_create_pinned(&mut self) -> Result<Category> {
        let pinned = self
            .conn
            .query_row(SELECT_PINNED_CATEGORY, [], Self::map_row)
            .optional()?;
        if let Some(existing) = pinned {
            return Ok(existing);
        }
        self.conn.execute(INSERT_CATEGORY, params![PINNED_CATEGORY_TITLE, true])?;
        let id = self.conn.last_insert_rowid();
        Ok(Category {
            id: Some(id),
            title: PINNED_CATEGORY_TITLE.to_string(),
            is_pinned: true,
            created_at: None,
        })
    }

    pub fn get_by_title(&mut self, title: &str) -> Result<Option<Category>> {
        self.conn
            .query_row(SELECT_CATEGORY_BY_TITLE, params![title], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Category>> {
        self.conn
            .query_row(SELECT_CATEGORY_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// All categories, the Pinned one first, the rest alphabetical.
    pub fn list(&mut self) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_CATEGORIES)?;
        let category_iter = stmt.query_map([], Self::map_row)?;

        let mut categories = Vec::new();
        for category in category_iter {
            categories.push(category?);
        }
        Ok(categories)
    }

    pub fn rename(&mut self, id: i64, new_title: &str) -> Result<()> {
        self.conn.execute(UPDATE_CATEGORY_TITLE, params![id, new_title])?;
        Ok(())
    }

    /// Number of trackers currently assigned to the category.
    pub fn tracker_count(&mut self, id: i64) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_TRACKERS_IN_CATEGORY, params![id], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete a category. Callers are expected to have checked that no
    /// tracker still references it; orphan cascade is not handled here.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        self.conn.execute(DELETE_CATEGORY, params![id])?;
        Ok(())
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Category> {
        Ok(Category {
            id: row.get(0)?,
            title: row.get(1)?,
            is_pinned: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}
