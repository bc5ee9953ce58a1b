//! Company profile singleton.

use super::lenient;
use crate::form::FormSubmission;
use serde::{Deserialize, Serialize};

pub const COMPANY_FIELDS: &[&str] = &["name", "mentor", "email", "phone", "address"];

/// Host company details. Every field is optional free text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mentor: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub updated_at: String,
}

impl CompanyProfile {
    /// Builds a profile from trimmed form values; there is no validation.
    pub fn from_form(form: &FormSubmission, updated_at: String) -> Self {
        Self {
            name: form.trimmed("name").to_string(),
            mentor: form.trimmed("mentor").to_string(),
            email: form.trimmed("email").to_string(),
            phone: form.trimmed("phone").to_string(),
            address: form.trimmed("address").to_string(),
            updated_at,
        }
    }

    pub fn to_form(&self) -> FormSubmission {
        FormSubmission::new()
            .with("name", self.name.as_str())
            .with("mentor", self.mentor.as_str())
            .with("email", self.email.as_str())
            .with("phone", self.phone.as_str())
            .with("address", self.address.as_str())
    }

    /// Multi-line text preview shown above the form.
    pub fn preview(&self) -> String {
        format!(
            "Company: {}\nMentor: {}\nEmail: {}\nPhone: {}\nAddress: {}",
            self.name, self.mentor, self.email, self.phone, self.address
        )
    }
}
