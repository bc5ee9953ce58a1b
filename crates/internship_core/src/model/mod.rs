//! Domain records persisted by the tracker.
//!
//! # Responsibility
//! - Define the session marker, the three list entry types and the company
//!   profile singleton.
//! - Convert between records and named-field forms.
//!
//! # Invariants
//! - List records carry no ID; identity is the position in the current list.
//! - Stored field names are camelCase; numbers decode leniently.

use crate::form::FormSubmission;
use crate::store::StorageKey;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod assessment;
pub mod company;
pub mod feedback;
mod lenient;
pub mod progress;
pub mod session;

pub use lenient::{format_number, parse_number};

/// A record type kept as a newest-first list under one storage key.
pub trait ListRecord: Clone + PartialEq + Serialize + DeserializeOwned {
    const KEY: StorageKey;
    /// Short metadata label used in log events.
    const LABEL: &'static str;
    /// Names of the form fields this record reads and prefills.
    const FIELDS: &'static [&'static str];
    /// Question asked before clearing the whole list.
    const CLEAR_PROMPT: &'static str;

    /// Builds a record from a submitted form, or `None` when validation fails.
    fn from_form(form: &FormSubmission, created_at: String) -> Option<Self>;

    /// Prefill values for the edit form.
    fn to_form(&self) -> FormSubmission;

    fn created_at(&self) -> &str;
}
