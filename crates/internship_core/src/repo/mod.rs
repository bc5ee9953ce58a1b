//! Typed repositories over the key-value store.
//!
//! # Responsibility
//! - Bind one record type to its fixed storage key.
//! - Keep JSON encoding details away from the page controllers.
//!
//! # Invariants
//! - Every write replaces the whole list or record (read-modify-write).
//! - Reads never fail on bad stored data; see `store::codec`.

pub mod list_repo;
pub mod record_repo;
