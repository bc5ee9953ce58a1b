//! Versioned `kv_entries` schema.
//!
//! Each entry of `UPGRADES` moves the database one version forward; the
//! entry at position `n` produces version `n + 1`.

use crate::store::{StoreError, StoreResult};
use log::info;
use rusqlite::Connection;

const UPGRADES: &[&str] = &[include_str!("kv_entries_v1.sql")];

/// Schema version this build reads and writes.
pub const SCHEMA_VERSION: u32 = UPGRADES.len() as u32;

/// What `ensure_schema` did to a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaUpgrade {
    /// Already at `SCHEMA_VERSION`; nothing ran.
    Current,
    Upgraded { from: u32, to: u32 },
}

pub fn schema_version(conn: &Connection) -> StoreResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?)
}

/// Runs every pending upgrade in one transaction.
///
/// # Errors
/// - `StoreError::SchemaTooNew` when the file was written by a newer build.
/// - `StoreError::Sqlite` when an upgrade statement fails; the transaction
///   rolls back and the version stays where it was.
pub fn ensure_schema(conn: &mut Connection) -> StoreResult<SchemaUpgrade> {
    let found = schema_version(conn)?;
    if found > SCHEMA_VERSION {
        return Err(StoreError::SchemaTooNew {
            found,
            supported: SCHEMA_VERSION,
        });
    }
    if found == SCHEMA_VERSION {
        return Ok(SchemaUpgrade::Current);
    }

    let tx = conn.transaction()?;
    for (position, sql) in UPGRADES.iter().enumerate().skip(found as usize) {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", position as u32 + 1)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={} to_version={}",
        found, SCHEMA_VERSION
    );
    Ok(SchemaUpgrade::Upgraded {
        from: found,
        to: SCHEMA_VERSION,
    })
}
