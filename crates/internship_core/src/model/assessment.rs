//! Mentor assessment records.

use super::{format_number, lenient, parse_number, ListRecord};
use crate::form::FormSubmission;
use crate::store::StorageKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    /// Not range-checked; the dashboard clamps only its progress bar.
    #[serde(
        default,
        deserialize_with = "lenient::number",
        serialize_with = "lenient::write_number"
    )]
    pub score: f64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub evaluator: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub comments: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: String,
}

impl ListRecord for AssessmentEntry {
    const KEY: StorageKey = StorageKey::AssessmentEntries;
    const LABEL: &'static str = "assessment";
    const FIELDS: &'static [&'static str] = &["date", "score", "evaluator", "comments"];
    const CLEAR_PROMPT: &'static str = "Clear all assessment records?";

    fn from_form(form: &FormSubmission, created_at: String) -> Option<Self> {
        let date = form.trimmed("date");
        let evaluator = form.trimmed("evaluator");
        let comments = form.trimmed("comments");
        let score = parse_number(form.value("score"))?;
        if date.is_empty() || evaluator.is_empty() || comments.is_empty() {
            return None;
        }

        Some(Self {
            date: date.to_string(),
            score,
            evaluator: evaluator.to_string(),
            comments: comments.to_string(),
            created_at,
        })
    }

    fn to_form(&self) -> FormSubmission {
        FormSubmission::new()
            .with("date", self.date.as_str())
            .with("score", format_number(self.score))
            .with("evaluator", self.evaluator.as_str())
            .with("comments", self.comments.as_str())
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}
