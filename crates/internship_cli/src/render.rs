//! Plain-text rendering of page views for the terminal.

use internship_core::view::{NO_RECENT_ACTIVITY, TableView};
use internship_core::{CompanyView, DashboardView, LoginView, Page, PageOutcome, PageView};
use std::io::{self, Write};

const SCORE_BAR_WIDTH: usize = 20;

pub fn redirect(out: &mut dyn Write, page: Page) -> io::Result<()> {
    writeln!(out, "→ redirect: {}", page.document())
}

pub fn outcome(out: &mut dyn Write, outcome: &PageOutcome) -> io::Result<()> {
    match outcome {
        PageOutcome::Redirect(page) => redirect(out, *page),
        PageOutcome::Rendered(view) => page_view(out, view),
        PageOutcome::Unrouted => writeln!(out, "no page registered for this marker"),
    }
}

pub fn page_view(out: &mut dyn Write, view: &PageView) -> io::Result<()> {
    match view {
        PageView::Login(view) => login(out, view),
        PageView::Dashboard(view) => dashboard(out, view),
        PageView::Progress(table) | PageView::Assessments(table) | PageView::Feedback(table) => {
            self::table(out, table)
        }
        PageView::Company(view) => company(out, view),
    }
}

pub fn login(out: &mut dyn Write, view: &LoginView) -> io::Result<()> {
    if view.error_visible {
        writeln!(out, "Invalid username or password.")
    } else {
        writeln!(out, "Please log in.")
    }
}

pub fn dashboard(out: &mut dyn Write, view: &DashboardView) -> io::Result<()> {
    writeln!(out, "Progress entries: {}", view.total_progress)?;
    writeln!(out, "Assessments:      {}", view.total_assessments)?;
    writeln!(out, "Feedback items:   {}", view.total_feedback)?;
    writeln!(
        out,
        "Average score:    {} [{}]",
        view.average_score,
        score_bar(view.progress_bar_percent)
    )?;
    writeln!(out, "Recent activity:")?;
    if view.recent_activity.is_empty() {
        return writeln!(out, "  {NO_RECENT_ACTIVITY}");
    }
    for line in &view.recent_activity {
        writeln!(out, "  • {line}")?;
    }
    Ok(())
}

/// One line per row, prefixed with the index that `edit`/`delete` take.
pub fn table(out: &mut dyn Write, table: &TableView) -> io::Result<()> {
    if table.is_empty() {
        return writeln!(out, "(no entries)");
    }
    for row in &table.rows {
        let cells = row
            .cells
            .iter()
            .map(|cell| cell.plain())
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(out, "[{}] {}", row.index, cells)?;
    }
    Ok(())
}

pub fn company(out: &mut dyn Write, view: &CompanyView) -> io::Result<()> {
    writeln!(out, "{}", view.preview)
}

fn score_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * SCORE_BAR_WIDTH / 100;
    format!(
        "{}{}",
        "#".repeat(filled),
        ".".repeat(SCORE_BAR_WIDTH - filled)
    )
}
