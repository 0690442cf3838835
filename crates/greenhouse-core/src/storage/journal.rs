//! Journal entry storage operations (CRUD)

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::db::{StoreResult, WriteOutcome};
use super::{text_column, write};
use crate::journal::JournalEntry;
use crate::watering::format_date;

const ENTRY_COLUMNS: &str = "id, plant_id, entry_date, notes, created_at";

/// Journal entry storage operations
pub struct JournalStore<'a> {
    conn: &'a Connection,
}

impl<'a> JournalStore<'a> {
    /// Create a new journal store
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Add an entry to a plant's journal
    ///
    /// # Errors
    /// Returns an error if the entry cannot be inserted, including when the
    /// plant does not exist
    pub fn add(&self, plant_id: i64, entry_date: NaiveDate, notes: &str) -> StoreResult<i64> {
        write(self.conn, "add_journal_entry", |tx| {
            tx.execute(
                r"
                INSERT INTO journal_entries (plant_id, entry_date, notes)
                VALUES (?1, ?2, ?3)
                ",
                params![plant_id, format_date(entry_date), notes],
            )?;
            Ok(tx.last_insert_rowid())
        })
    }

    /// List a plant's entries, latest entry date first
    ///
    /// # Errors
    /// Returns an error if the entries cannot be read
    pub fn list_for_plant(&self, plant_id: i64) -> StoreResult<Vec<JournalEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            r"
            SELECT {ENTRY_COLUMNS} FROM journal_entries
            WHERE plant_id = ?1
            ORDER BY entry_date DESC, id DESC
            "
        ))?;

        let rows = stmt.query_map(params![plant_id], row_to_entry)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Get an entry by ID
    ///
    /// # Errors
    /// Returns an error if the entry cannot be read
    pub fn get(&self, id: i64) -> StoreResult<Option<JournalEntry>> {
        let entry = self
            .conn
            .query_row(
                &format!("SELECT {ENTRY_COLUMNS} FROM journal_entries WHERE id = ?1"),
                params![id],
                row_to_entry,
            )
            .optional()?;
        Ok(entry)
    }

    /// Replace an entry's date and notes
    ///
    /// # Errors
    /// Returns an error if the update fails
    pub fn update(&self, id: i64, entry_date: NaiveDate, notes: &str) -> StoreResult<WriteOutcome> {
        write(self.conn, "update_journal_entry", |tx| {
            let updated = tx.execute(
                "UPDATE journal_entries SET entry_date = ?1, notes = ?2 WHERE id = ?3",
                params![format_date(entry_date), notes, id],
            )?;
            Ok(WriteOutcome::from_rows(updated))
        })
    }

    /// Delete an entry
    ///
    /// # Errors
    /// Returns an error if the delete fails
    pub fn delete(&self, id: i64) -> StoreResult<WriteOutcome> {
        write(self.conn, "delete_journal_entry", |tx| {
            let deleted = tx.execute("DELETE FROM journal_entries WHERE id = ?1", params![id])?;
            Ok(WriteOutcome::from_rows(deleted))
        })
    }
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<JournalEntry> {
    Ok(JournalEntry {
        id: row.get(0)?,
        plant_id: row.get(1)?,
        entry_date: text_column(row, 2)?,
        notes: text_column(row, 3)?.unwrap_or_default(),
        created_at: text_column(row, 4)?.unwrap_or_default(),
    })
}
