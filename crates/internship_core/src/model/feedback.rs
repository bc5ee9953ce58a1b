//! Free-form feedback items with a 1-5 rating.

use super::{format_number, lenient, parse_number, ListRecord};
use crate::form::FormSubmission;
use crate::store::StorageKey;
use serde::{Deserialize, Serialize};

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        serialize_with = "lenient::write_number"
    )]
    pub rating: f64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: String,
}

impl ListRecord for FeedbackEntry {
    const KEY: StorageKey = StorageKey::FeedbackEntries;
    const LABEL: &'static str = "feedback";
    const FIELDS: &'static [&'static str] = &["message", "category", "rating"];
    const CLEAR_PROMPT: &'static str = "Clear all feedback items?";

    fn from_form(form: &FormSubmission, created_at: String) -> Option<Self> {
        let message = form.trimmed("message");
        if message.is_empty() {
            return None;
        }
        let rating = parse_number(form.value("rating"))
            .filter(|rating| (MIN_RATING..=MAX_RATING).contains(rating))?;

        Some(Self {
            message: message.to_string(),
            category: form.trimmed("category").to_string(),
            rating,
            created_at,
        })
    }

    fn to_form(&self) -> FormSubmission {
        FormSubmission::new()
            .with("message", self.message.as_str())
            .with("category", self.category.as_str())
            .with("rating", format_number(self.rating))
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::FeedbackEntry;
    use crate::form::FormSubmission;
    use crate::model::ListRecord;

    #[test]
    fn rating_outside_one_to_five_is_rejected() {
        let base = FormSubmission::new()
            .with("message", "Great onboarding")
            .with("category", "Mentorship");
        for bad in ["0", "6", "", "five"] {
            let form = base.clone().with("rating", bad);
            assert!(FeedbackEntry::from_form(&form, String::new()).is_none(), "{bad}");
        }
        let form = base.with("rating", "4");
        let entry = FeedbackEntry::from_form(&form, String::new()).unwrap();
        assert_eq!(entry.rating, 4.0);
        assert_eq!(entry.category, "Mentorship");
    }
}
