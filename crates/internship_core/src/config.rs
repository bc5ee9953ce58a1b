//! Core runtime configuration.
//!
//! # Invariants
//! - `EditMode` string forms are stable: `in-place` and `take-out`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How the list controllers treat an edit before resubmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Nothing is written until the draft is resubmitted; the resubmission
    /// replaces the original record at its position.
    #[default]
    InPlace,
    /// The record is removed as soon as the edit starts and the resubmission
    /// re-adds it at the top. A cancelled edit loses the record.
    TakeOut,
}

impl EditMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InPlace => "in-place",
            Self::TakeOut => "take-out",
        }
    }
}

impl Display for EditMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "in-place" | "inplace" => Ok(Self::InPlace),
            "take-out" | "takeout" => Ok(Self::TakeOut),
            other => Err(format!(
                "unsupported edit mode `{other}`; expected in-place|take-out"
            )),
        }
    }
}

/// Settings shared by every page controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoreConfig {
    pub edit_mode: EditMode,
}

impl CoreConfig {
    pub fn with_edit_mode(edit_mode: EditMode) -> Self {
        Self { edit_mode }
    }
}
