//! Narrative generator port.
//!
//! Everything the service asks a language model to write: mentor replies,
//! progress narratives, emotional insights and mood labels. Callers own the fallbacks, so an
//! implementation should return an error rather than invent placeholder text.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::mentor::{
    EmotionalInsights, MentorKind, MentorResponse, ProgressNarrative, UserContext,
};
use crate::domain::progress::{Mood, ProgressMetrics};

/// One journal entry as shown to the narrative writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeEntry {
    pub content: String,
    pub mood: Option<String>,
}

/// Input for a progress narrative.
#[derive(Debug, Clone)]
pub struct ProgressNarrativeRequest {
    pub user_id: UserId,
    /// Most recent entries, newest first.
    pub entries: Vec<NarrativeEntry>,
    pub mbti_type: Option<String>,
    pub metrics: ProgressMetrics,
}

/// Input for emotional insights over recent entries.
#[derive(Debug, Clone)]
pub struct EmotionalInsightsRequest {
    pub user_id: UserId,
    /// Most recent entries, newest first.
    pub entries: Vec<NarrativeEntry>,
    pub mbti_type: Option<String>,
}

#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Writes a reply to `entry` in the voice of `mentor`.
    ///
    /// # Errors
    ///
    /// - `AIProviderError` if the text could not be generated
    async fn mentor_response(
        &self,
        mentor: MentorKind,
        entry: &str,
        context: &UserContext,
    ) -> Result<MentorResponse, DomainError>;

    /// Describes patterns, growth areas, strengths and recommendations.
    ///
    /// # Errors
    ///
    /// - `AIProviderError` if the text could not be generated
    async fn progress_narrative(
        &self,
        request: &ProgressNarrativeRequest,
    ) -> Result<ProgressNarrative, DomainError>;

    /// Describes patterns, growth areas and strengths without metrics.
    ///
    /// # Errors
    ///
    /// - `AIProviderError` if the text could not be generated
    async fn emotional_insights(
        &self,
        request: &EmotionalInsightsRequest,
    ) -> Result<EmotionalInsights, DomainError>;

    /// Labels the emotional tone of an entry.
    ///
    /// An answer outside the four moods is reported as `Mood::Neutral`.
    async fn classify_mood(&self, entry: &str) -> Result<Mood, DomainError>;
}
