use crate::db::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "habita.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Open the application database, applying pending migrations.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        // Completion records cascade with their tracker.
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Open the database without touching the schema; used by the
    /// migration inspection commands.
    pub fn new_without_migrations() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        Ok(conn)
    }
}
