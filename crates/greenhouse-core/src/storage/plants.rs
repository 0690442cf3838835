//! Plant storage operations (CRUD)

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::db::{StoreResult, WriteOutcome};
use super::{text_column, write};
use crate::plant::Plant;
use crate::watering::{self, format_date};

const PLANT_COLUMNS: &str = "id, name, date_planted, care_plan, last_watered, created_at";

/// Plant storage operations
pub struct PlantStore<'a> {
    conn: &'a Connection,
}

impl<'a> PlantStore<'a> {
    /// Create a new plant store
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Add a plant that has never been watered
    ///
    /// The name is stored as given; callers validate it.
    ///
    /// # Errors
    /// Returns an error if the plant cannot be inserted
    pub fn add(
        &self,
        name: &str,
        date_planted: Option<NaiveDate>,
        care_plan: Option<&str>,
    ) -> StoreResult<i64> {
        write(self.conn, "add_plant", |tx| {
            tx.execute(
                r"
                INSERT INTO plants (name, date_planted, care_plan, last_watered)
                VALUES (?1, ?2, ?3, NULL)
                ",
                params![name, date_planted.map(format_date), care_plan],
            )?;
            Ok(tx.last_insert_rowid())
        })
    }

    /// List all plants, newest first
    ///
    /// # Errors
    /// Returns an error if the plants cannot be read
    pub fn list(&self) -> StoreResult<Vec<Plant>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PLANT_COLUMNS} FROM plants ORDER BY created_at DESC, id DESC"
        ))?;

        let rows = stmt.query_map([], row_to_plant)?;

        let mut plants = Vec::new();
        for row in rows {
            plants.push(row?);
        }
        Ok(plants)
    }

    /// Get a plant by ID
    ///
    /// # Errors
    /// Returns an error if the plant cannot be read
    pub fn get(&self, id: i64) -> StoreResult<Option<Plant>> {
        let plant = self
            .conn
            .query_row(
                &format!("SELECT {PLANT_COLUMNS} FROM plants WHERE id = ?1"),
                params![id],
                row_to_plant,
            )
            .optional()?;
        Ok(plant)
    }

    /// Replace a plant's name, planting date and care plan
    ///
    /// `last_watered` is left untouched.
    ///
    /// # Errors
    /// Returns an error if the update fails
    pub fn update(
        &self,
        id: i64,
        name: &str,
        date_planted: Option<NaiveDate>,
        care_plan: Option<&str>,
    ) -> StoreResult<WriteOutcome> {
        write(self.conn, "update_plant", |tx| {
            let updated = tx.execute(
                r"
                UPDATE plants
                SET name = ?1, date_planted = ?2, care_plan = ?3
                WHERE id = ?4
                ",
                params![name, date_planted.map(format_date), care_plan, id],
            )?;
            Ok(WriteOutcome::from_rows(updated))
        })
    }

    /// Delete a plant and all of its journal entries
    ///
    /// Entries are removed first, in the same transaction, so no entry is
    /// ever left pointing at a missing plant.
    ///
    /// # Errors
    /// Returns an error if either delete fails
    pub fn delete(&self, id: i64) -> StoreResult<WriteOutcome> {
        write(self.conn, "delete_plant", |tx| {
            let entries = tx.execute(
                "DELETE FROM journal_entries WHERE plant_id = ?1",
                params![id],
            )?;
            let deleted = tx.execute("DELETE FROM plants WHERE id = ?1", params![id])?;
            tracing::debug!(plant_id = id, entries, "deleted plant");
            Ok(WriteOutcome::from_rows(deleted))
        })
    }

    /// Mark a plant as watered today
    ///
    /// # Errors
    /// Returns an error if the update fails
    pub fn water(&self, id: i64) -> StoreResult<WriteOutcome> {
        self.water_on(id, watering::today())
    }

    /// Record a watering on a specific date
    ///
    /// # Errors
    /// Returns an error if the update fails
    pub fn water_on(&self, id: i64, date: NaiveDate) -> StoreResult<WriteOutcome> {
        write(self.conn, "water_plant", |tx| {
            let updated = tx.execute(
                "UPDATE plants SET last_watered = ?1 WHERE id = ?2",
                params![format_date(date), id],
            )?;
            Ok(WriteOutcome::from_rows(updated))
        })
    }
}

fn row_to_plant(row: &Row<'_>) -> rusqlite::Result<Plant> {
    Ok(Plant {
        id: row.get(0)?,
        name: text_column(row, 1)?.unwrap_or_default(),
        date_planted: text_column(row, 2)?,
        care_plan: text_column(row, 3)?,
        last_watered: text_column(row, 4)?,
        created_at: text_column(row, 5)?.unwrap_or_default(),
    })
}
