//! Table rows produced by the list controllers.

use super::escape_html;
use crate::clock::display_local;
use crate::model::assessment::AssessmentEntry;
use crate::model::feedback::FeedbackEntry;
use crate::model::format_number;
use crate::model::progress::{ProgressEntry, ProgressStatus};
use serde::Serialize;

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Success,
    Warning,
    Info,
}

impl BadgeTone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text { text: String },
    Chip { text: String },
    Badge { tone: BadgeTone, text: String },
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn chip(text: impl Into<String>) -> Self {
        Self::Chip { text: text.into() }
    }

    /// Plain text content, without decoration.
    pub fn plain(&self) -> &str {
        match self {
            Self::Text { text } | Self::Chip { text } | Self::Badge { text, .. } => text,
        }
    }

    fn to_html(&self) -> String {
        match self {
            Self::Text { text } => format!("<td>{}</td>", escape_html(text)),
            Self::Chip { text } => {
                format!("<td><span class=\"chip\">{}</span></td>", escape_html(text))
            }
            Self::Badge { tone, text } => format!(
                "<td><span class=\"badge {} dot\">{}</span></td>",
                tone.as_str(),
                escape_html(text)
            ),
        }
    }
}

/// Per-row action; the index travels with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "edit" => Some(Self::Edit),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Position in the current snapshot; invalid after any mutation.
    pub index: usize,
    pub cells: Vec<Cell>,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn from_records<T: TableRecord>(records: &[T]) -> Self {
        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| TableRow {
                index,
                cells: record.cells(),
                actions: vec![RowAction::Edit, RowAction::Delete],
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `<tr>` fragment for a table body, one row per record.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str("<tr>");
            for cell in &row.cells {
                out.push_str(&cell.to_html());
            }
            out.push_str("<td>");
            for action in &row.actions {
                let (class, label) = match action {
                    RowAction::Edit => ("btn subtle", "Edit"),
                    RowAction::Delete => ("btn danger", "Delete"),
                };
                out.push_str(&format!(
                    "<button class=\"{class}\" data-action=\"{}\" data-idx=\"{}\">{label}</button>",
                    action.as_str(),
                    row.index
                ));
            }
            out.push_str("</td></tr>");
        }
        out
    }
}

/// Cells shown for one record in its page table.
pub trait TableRecord {
    fn cells(&self) -> Vec<Cell>;
}

impl TableRecord for ProgressEntry {
    fn cells(&self) -> Vec<Cell> {
        let tone = match self.status {
            ProgressStatus::Completed => BadgeTone::Success,
            ProgressStatus::Blocked => BadgeTone::Warning,
            ProgressStatus::InProgress => BadgeTone::Info,
        };
        vec![
            Cell::text(self.date.as_str()),
            Cell::chip(format!("{} h", format_number(self.hours))),
            Cell::text(self.task.as_str()),
            Cell::Badge {
                tone,
                text: self.status.label().to_string(),
            },
        ]
    }
}

impl TableRecord for AssessmentEntry {
    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.date.as_str()),
            Cell::chip(format_number(self.score)),
            Cell::text(self.evaluator.as_str()),
            Cell::text(self.comments.as_str()),
        ]
    }
}

impl TableRecord for FeedbackEntry {
    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.message.as_str()),
            Cell::chip(self.category.as_str()),
            Cell::chip(format!("{}/5", format_number(self.rating))),
            Cell::text(display_local(&self.created_at)),
        ]
    }
}
