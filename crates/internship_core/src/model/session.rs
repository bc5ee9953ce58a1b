//! Login session marker.

use super::lenient;
use serde::{Deserialize, Serialize};

/// Presence of this record is what gates the protected pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default, deserialize_with = "lenient::text")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub login_at: String,
}

impl SessionUser {
    pub fn new(username: impl Into<String>, login_at: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            login_at: login_at.into(),
        }
    }
}
