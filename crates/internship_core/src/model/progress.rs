//! Daily progress log entries.
//!
//! # Invariants
//! - `date` and `task` are never empty for records created from a form.
//! - Unknown stored status strings decode as `InProgress`.

use super::{lenient, parse_number, ListRecord};
use crate::form::FormSubmission;
use crate::store::StorageKey;
use serde::{Deserialize, Deserializer, Serialize};

/// Work state of a logged task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProgressStatus {
    #[default]
    InProgress,
    Completed,
    Blocked,
}

impl ProgressStatus {
    /// Display and wire label.
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Blocked => "Blocked",
        }
    }

    /// Lenient parse; anything unrecognized is treated as in progress.
    pub fn parse(value: &str) -> Self {
        let normalized = value
            .trim()
            .to_ascii_lowercase()
            .replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "completed" | "done" => Self::Completed,
            "blocked" => Self::Blocked,
            _ => Self::InProgress,
        }
    }
}

impl From<String> for ProgressStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ProgressStatus> for String {
    fn from(value: ProgressStatus) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        serialize_with = "lenient::write_number"
    )]
    pub hours: f64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub task: String,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: ProgressStatus,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: String,
}

fn lenient_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ProgressStatus, D::Error> {
    lenient::text(deserializer).map(|value| ProgressStatus::parse(&value))
}

impl ListRecord for ProgressEntry {
    const KEY: StorageKey = StorageKey::ProgressEntries;
    const LABEL: &'static str = "progress";
    const FIELDS: &'static [&'static str] = &["date", "hours", "task", "status"];
    const CLEAR_PROMPT: &'static str = "Clear all progress entries?";

    fn from_form(form: &FormSubmission, created_at: String) -> Option<Self> {
        let date = form.trimmed("date");
        let task = form.trimmed("task");
        if date.is_empty() || task.is_empty() {
            return None;
        }
        // An empty hours field counts as zero; anything else must be numeric.
        let hours = match form.trimmed("hours") {
            "" => 0.0,
            raw => parse_number(raw)?,
        };

        Some(Self {
            date: date.to_string(),
            hours,
            task: task.to_string(),
            status: ProgressStatus::parse(form.value("status")),
            created_at,
        })
    }

    fn to_form(&self) -> FormSubmission {
        FormSubmission::new()
            .with("date", self.date.as_str())
            .with("hours", super::format_number(self.hours))
            .with("task", self.task.as_str())
            .with("status", self.status.label())
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::{ProgressEntry, ProgressStatus};
    use crate::form::FormSubmission;
    use crate::model::ListRecord;

    fn form(hours: &str) -> FormSubmission {
        FormSubmission::new()
            .with("date", "2026-10-19")
            .with("hours", hours)
            .with("task", " standup ")
            .with("status", "Completed")
    }

    #[test]
    fn from_form_trims_and_defaults_empty_hours() {
        let entry = ProgressEntry::from_form(&form(""), "t".to_string()).unwrap();
        assert_eq!(entry.task, "standup");
        assert_eq!(entry.hours, 0.0);
        assert_eq!(entry.status, ProgressStatus::Completed);
    }

    #[test]
    fn from_form_rejects_missing_required_or_bad_hours() {
        assert!(ProgressEntry::from_form(&form("many"), "t".to_string()).is_none());
        let missing_task = form("2").with("task", "   ");
        assert!(ProgressEntry::from_form(&missing_task, "t".to_string()).is_none());
    }

    #[test]
    fn status_uses_display_labels_on_the_wire() {
        let json = serde_json::to_string(&ProgressStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let parsed: ProgressStatus = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(parsed, ProgressStatus::InProgress);
    }

    #[test]
    fn lenient_decode_fills_missing_fields() {
        let entry: ProgressEntry =
            serde_json::from_str(r#"{"date":"2026-01-02","hours":"3","status":"Blocked"}"#)
                .unwrap();
        let odd_status: ProgressEntry = serde_json::from_str(r#"{"status":42}"#).unwrap();
        assert_eq!(odd_status.status, ProgressStatus::InProgress);
        assert_eq!(entry.hours, 3.0);
        assert_eq!(entry.task, "");
        assert_eq!(entry.status, ProgressStatus::Blocked);
    }
}
