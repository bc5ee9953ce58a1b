//! Read-only dashboard aggregation.
//!
//! # Invariants
//! - Never writes to the store.
//! - Average score is 0 for an empty list; halves round toward +infinity.
//! - Progress bar width stays within 0..=100 whatever scores are stored.

use crate::model::assessment::AssessmentEntry;
use crate::model::feedback::FeedbackEntry;
use crate::model::format_number;
use crate::model::progress::ProgressEntry;
use crate::repo::list_repo::EntryListRepository;
use crate::store::{KeyValueStore, StoreResult};
use crate::view::DashboardView;

/// Characters of the newest feedback message shown on the dashboard.
pub const FEEDBACK_EXCERPT_CHARS: usize = 60;

pub struct DashboardService<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> DashboardService<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    pub fn summary(&self) -> StoreResult<DashboardView> {
        let progress = EntryListRepository::<ProgressEntry>::new(self.store).load()?;
        let assessments = EntryListRepository::<AssessmentEntry>::new(self.store).load()?;
        let feedback = EntryListRepository::<FeedbackEntry>::new(self.store).load()?;

        let average_score = average_score(&assessments);
        let mut recent_activity = Vec::new();
        if let Some(latest) = progress.first() {
            recent_activity.push(format!("Latest progress: {} - {}", latest.date, latest.task));
        }
        if let Some(latest) = assessments.first() {
            recent_activity.push(format!(
                "Latest assessment: {} - {}",
                latest.date,
                format_number(latest.score)
            ));
        }
        if let Some(latest) = feedback.first() {
            let excerpt = latest
                .message
                .chars()
                .take(FEEDBACK_EXCERPT_CHARS)
                .collect::<String>();
            recent_activity.push(format!("Latest feedback: \"{excerpt}\""));
        }

        Ok(DashboardView {
            total_progress: progress.len(),
            total_assessments: assessments.len(),
            total_feedback: feedback.len(),
            average_score,
            progress_bar_percent: progress_bar_percent(average_score),
            recent_activity,
        })
    }
}

/// Mean score rounded to the nearest integer; 0 when there are no scores.
pub fn average_score(assessments: &[AssessmentEntry]) -> i64 {
    if assessments.is_empty() {
        return 0;
    }
    let total = assessments.iter().map(|entry| entry.score).sum::<f64>();
    let mean = total / assessments.len() as f64;
    (mean + 0.5).floor() as i64
}

pub fn progress_bar_percent(average_score: i64) -> u8 {
    average_score.clamp(0, 100) as u8
}
