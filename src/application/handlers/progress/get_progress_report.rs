//! GetProgressReportHandler - Query handler for the comprehensive progress view.
//!
//! Metrics are computed first. The narrative is generated afterwards under a
//! timeout and replaced by a static bundle if it fails, so the numbers are
//! always returned.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::journal::JournalEntry;
use crate::domain::mentor::{NarrativeSource, ProgressNarrative};
use crate::domain::progress::{JournalEntryRecord, MoodTrendPoint, ProgressAnalyzer, ProgressMetrics};
use crate::ports::{
    AssessmentRepository, JournalEntryRepository, NarrativeEntry, NarrativeGenerator,
    ProgressNarrativeRequest,
};

use super::super::assessment::latest_mbti_type;

#[derive(Debug, Clone)]
pub struct GetProgressReportQuery {
    pub user_id: UserId,
}

/// Metrics, narrative and mood series for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub metrics: ProgressMetrics,
    pub narrative: ProgressNarrative,
    pub narrative_source: NarrativeSource,
    pub mood_trends: Vec<MoodTrendPoint>,
}

/// Handler for progress reports.
pub struct GetProgressReportHandler {
    entries: Arc<dyn JournalEntryRepository>,
    assessments: Arc<dyn AssessmentRepository>,
    narrator: Arc<dyn NarrativeGenerator>,
    analyzer: ProgressAnalyzer,
    entry_limit: u32,
    narrative_timeout: Duration,
}

impl GetProgressReportHandler {
    pub fn new(
        entries: Arc<dyn JournalEntryRepository>,
        assessments: Arc<dyn AssessmentRepository>,
        narrator: Arc<dyn NarrativeGenerator>,
        analyzer: ProgressAnalyzer,
        entry_limit: u32,
        narrative_timeout: Duration,
    ) -> Self {
        Self {
            entries,
            assessments,
            narrator,
            analyzer,
            entry_limit,
            narrative_timeout,
        }
    }

    /// # Errors
    ///
    /// - `DatabaseError` if entries or assessments cannot be loaded
    pub async fn handle(&self, query: GetProgressReportQuery) -> Result<ProgressReport, DomainError> {
        let entries = self
            .entries
            .list_recent(&query.user_id, self.entry_limit)
            .await?;
        let mbti_type = latest_mbti_type(self.assessments.as_ref(), &query.user_id).await?;

        let records: Vec<JournalEntryRecord> = entries.iter().map(JournalEntry::to_record).collect();
        let metrics = self.analyzer.analyze(&records);
        let mood_trends = self.analyzer.mood_trends(&records);

        tracing::debug!(
            user_id = %query.user_id,
            entry_count = entries.len(),
            total_entries = metrics.total_entries,
            current_streak = metrics.current_streak,
            "Progress metrics computed"
        );

        let (narrative, narrative_source) = if entries.is_empty() {
            (ProgressNarrative::empty_history(), NarrativeSource::EmptyHistory)
        } else {
            let request = ProgressNarrativeRequest {
                user_id: query.user_id.clone(),
                entries: entries
                    .iter()
                    .map(|e| NarrativeEntry {
                        content: e.content().to_string(),
                        mood: e.mood().map(str::to_string),
                    })
                    .collect(),
                mbti_type,
                metrics,
            };
            self.narrative(&request).await
        };

        Ok(ProgressReport {
            metrics,
            narrative,
            narrative_source,
            mood_trends,
        })
    }

    async fn narrative(
        &self,
        request: &ProgressNarrativeRequest,
    ) -> (ProgressNarrative, NarrativeSource) {
        let generated = tokio::time::timeout(
            self.narrative_timeout,
            self.narrator.progress_narrative(request),
        )
        .await;

        match generated {
            Ok(Ok(narrative)) => (narrative, NarrativeSource::Generated),
            Ok(Err(e)) => {
                tracing::warn!(user_id = %request.user_id, error = %e, "Progress narrative failed, using fallback");
                (ProgressNarrative::fallback(), NarrativeSource::Fallback)
            }
            Err(_) => {
                tracing::warn!(
                    user_id = %request.user_id,
                    timeout_secs = self.narrative_timeout.as_secs_f64(),
                    "Progress narrative timed out, using fallback"
                );
                (ProgressNarrative::fallback(), NarrativeSource::Fallback)
            }
        }
    }
}
