//! Database migrations

use rusqlite::Connection;

use super::db::StoreError;

const CURRENT_VERSION: i32 = 1;

/// Run all pending migrations
///
/// Tables use `IF NOT EXISTS`, so files created before versioning was
/// introduced are adopted without changes to their data.
///
/// # Errors
/// Returns an error if migrations fail
pub fn run_migrations(conn: &Connection) -> Result<(), StoreError> {
    let version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if version > CURRENT_VERSION {
        return Err(StoreError::Migration(format!(
            "database schema version {version} is newer than supported version {CURRENT_VERSION}"
        )));
    }

    if version < 1 {
        tracing::debug!("applying schema v1");
        migrate_v1(conn)?;
    }

    conn.pragma_update(None, "user_version", CURRENT_VERSION)?;
    Ok(())
}

fn migrate_v1(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS plants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            date_planted DATE,
            care_plan TEXT,
            last_watered DATE,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS journal_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            plant_id INTEGER,
            entry_date DATE,
            notes TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (plant_id) REFERENCES plants (id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_journal_plant ON journal_entries(plant_id);
        ",
    )?;

    Ok(())
}
