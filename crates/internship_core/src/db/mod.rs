//! SQLite bootstrap for the key-value store.
//!
//! # Responsibility
//! - Open the file (or in-memory database) behind `SqliteStore`.
//! - Bring the `kv_entries` schema up to `SCHEMA_VERSION` before first use.
//!
//! # Invariants
//! - The schema version lives in `PRAGMA user_version`.
//! - A database written by a newer build is refused, never downgraded.
//! - Failures surface as `StoreError`, the same error the store returns.

mod open;
mod schema;

pub use open::{open_db, open_db_in_memory};
pub use schema::{ensure_schema, schema_version, SchemaUpgrade, SCHEMA_VERSION};
