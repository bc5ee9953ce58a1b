//! Named-field form submissions.
//!
//! The rendering surface hands the core "a form submitted with named fields";
//! edit drafts hand the same shape back as prefill values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSubmission {
    fields: BTreeMap<String, String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Raw field value; a missing field reads as empty.
    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }

    pub fn trimmed(&self, name: &str) -> &str {
        self.value(name).trim()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (name, value) in iter {
            form.set(name, value);
        }
        form
    }
}
