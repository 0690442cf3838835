//! Storage layer (`SQLite`)

pub mod db;
pub mod journal;
pub mod migrations;
pub mod plants;

pub use db::{Database, StoreError, StoreResult, WriteOutcome};
pub use journal::JournalStore;
pub use plants::PlantStore;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row, Transaction};

/// Run `f` inside a transaction that commits on success
///
/// The transaction rolls back when dropped on any error path. Failures are
/// logged with the operation name before being returned.
pub(crate) fn write<T, F>(conn: &Connection, operation: &'static str, f: F) -> StoreResult<T>
where
    F: FnOnce(&Transaction<'_>) -> StoreResult<T>,
{
    let result = conn
        .unchecked_transaction()
        .map_err(StoreError::from)
        .and_then(|tx| {
            let value = f(&tx)?;
            tx.commit()?;
            Ok(value)
        });

    if let Err(e) = &result {
        tracing::warn!(operation, error = %e, "write failed");
    }
    result
}

/// Read a column as text regardless of the storage class SQLite gave it
///
/// `DATE` columns have numeric affinity, so a malformed value such as `12`
/// comes back as an integer. Reads must not fail on those rows.
pub(crate) fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    })
}
