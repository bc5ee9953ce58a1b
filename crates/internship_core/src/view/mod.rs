//! Render outputs handed to the external rendering surface.
//!
//! # Responsibility
//! - Describe each page as plain data (rows, preview text, summary numbers).
//! - Produce the HTML fragments the surface injects verbatim.
//!
//! # Invariants
//! - Every piece of user text placed into HTML goes through `escape_html`.

use crate::form::FormSubmission;
use serde::Serialize;

pub mod table;

pub use table::{BadgeTone, Cell, RowAction, TableRecord, TableRow, TableView};

pub const COMPANY_PLACEHOLDER: &str = "No data saved yet.";
pub const NO_RECENT_ACTIVITY: &str = "No recent activity yet.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoginView {
    /// Whether the static "invalid credentials" element is shown.
    pub error_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyView {
    pub preview: String,
    /// Prefill values; `None` when no profile is stored.
    pub form: Option<FormSubmission>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub total_progress: usize,
    pub total_assessments: usize,
    pub total_feedback: usize,
    pub average_score: i64,
    /// Progress bar width, `average_score` clamped to 0..=100.
    pub progress_bar_percent: u8,
    pub recent_activity: Vec<String>,
}

impl DashboardView {
    pub fn recent_activity_html(&self) -> String {
        if self.recent_activity.is_empty() {
            return format!("<div>{NO_RECENT_ACTIVITY}</div>");
        }
        self.recent_activity
            .iter()
            .map(|line| format!("<div>• {}</div>", escape_html(line)))
            .collect()
    }
}

/// Fully rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "view", rename_all = "snake_case")]
pub enum PageView {
    Login(LoginView),
    Dashboard(DashboardView),
    Progress(TableView),
    Assessments(TableView),
    Company(CompanyView),
    Feedback(TableView),
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_html, DashboardView};

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn empty_activity_renders_placeholder() {
        let view = DashboardView {
            total_progress: 0,
            total_assessments: 0,
            total_feedback: 0,
            average_score: 0,
            progress_bar_percent: 0,
            recent_activity: Vec::new(),
        };
        assert_eq!(view.recent_activity_html(), "<div>No recent activity yet.</div>");
    }
}
