//! GetEmotionalInsightsHandler - Query handler for patterns, growth areas and strengths.
//!
//! Unlike the progress report there are no metrics here, only the generated
//! text, which falls back to a static bundle on failure or timeout.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::mentor::{EmotionalInsights, NarrativeSource};
use crate::ports::{
    AssessmentRepository, EmotionalInsightsRequest, JournalEntryRepository, NarrativeEntry,
    NarrativeGenerator,
};

use super::super::assessment::latest_mbti_type;

#[derive(Debug, Clone)]
pub struct GetEmotionalInsightsQuery {
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmotionalInsightsReport {
    pub insights: EmotionalInsights,
    pub source: NarrativeSource,
}

pub struct GetEmotionalInsightsHandler {
    entries: Arc<dyn JournalEntryRepository>,
    assessments: Arc<dyn AssessmentRepository>,
    narrator: Arc<dyn NarrativeGenerator>,
    entry_limit: u32,
    timeout: Duration,
}

impl GetEmotionalInsightsHandler {
    pub fn new(
        entries: Arc<dyn JournalEntryRepository>,
        assessments: Arc<dyn AssessmentRepository>,
        narrator: Arc<dyn NarrativeGenerator>,
        entry_limit: u32,
        timeout: Duration,
    ) -> Self {
        Self {
            entries,
            assessments,
            narrator,
            entry_limit,
            timeout,
        }
    }

    /// # Errors
    ///
    /// - `DatabaseError` if entries or assessments cannot be loaded
    pub async fn handle(
        &self,
        query: GetEmotionalInsightsQuery,
    ) -> Result<EmotionalInsightsReport, DomainError> {
        let entries = self
            .entries
            .list_recent(&query.user_id, self.entry_limit)
            .await?;

        if entries.is_empty() {
            return Ok(EmotionalInsightsReport {
                insights: EmotionalInsights::empty_history(),
                source: NarrativeSource::EmptyHistory,
            });
        }

        let request = EmotionalInsightsRequest {
            user_id: query.user_id.clone(),
            entries: entries
                .iter()
                .map(|e| NarrativeEntry {
                    content: e.content().to_string(),
                    mood: e.mood().map(str::to_string),
                })
                .collect(),
            mbti_type: latest_mbti_type(self.assessments.as_ref(), &query.user_id).await?,
        };

        let generated =
            tokio::time::timeout(self.timeout, self.narrator.emotional_insights(&request)).await;

        let report = match generated {
            Ok(Ok(insights)) => EmotionalInsightsReport {
                insights,
                source: NarrativeSource::Generated,
            },
            Ok(Err(e)) => {
                tracing::warn!(user_id = %query.user_id, error = %e, "Emotional insights failed, using fallback");
                EmotionalInsightsReport {
                    insights: EmotionalInsights::fallback(),
                    source: NarrativeSource::Fallback,
                }
            }
            Err(_) => {
                tracing::warn!(
                    user_id = %query.user_id,
                    timeout_secs = self.timeout.as_secs_f64(),
                    "Emotional insights timed out, using fallback"
                );
                EmotionalInsightsReport {
                    insights: EmotionalInsights::fallback(),
                    source: NarrativeSource::Fallback,
                }
            }
        };
        Ok(report)
    }
}
