//! Scripted narrative generator shared by handler tests.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::mentor::{
    EmotionalInsights, MentorKind, MentorResponse, ProgressNarrative, UserContext,
};
use crate::domain::progress::Mood;
use crate::ports::{EmotionalInsightsRequest, NarrativeGenerator, ProgressNarrativeRequest};

fn unavailable() -> DomainError {
    DomainError::new(ErrorCode::AIProviderError, "scripted failure")
}

/// Returns canned values, or fails where nothing is scripted.
#[derive(Default)]
pub struct ScriptedNarrator {
    pub mood: Option<Mood>,
    pub mentor: Option<MentorResponse>,
    pub narrative: Option<ProgressNarrative>,
    pub insights: Option<EmotionalInsights>,
    pub delay: Duration,
    pub mentor_contexts: Mutex<Vec<UserContext>>,
    pub narrative_requests: Mutex<Vec<ProgressNarrativeRequest>>,
    pub insight_requests: Mutex<Vec<EmotionalInsightsRequest>>,
    pub mood_calls: Mutex<u32>,
}

impl ScriptedNarrator {
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn mentor_contexts(&self) -> Vec<UserContext> {
        self.mentor_contexts.lock().unwrap().clone()
    }

    pub fn narrative_requests(&self) -> Vec<ProgressNarrativeRequest> {
        self.narrative_requests.lock().unwrap().clone()
    }

    pub fn insight_requests(&self) -> Vec<EmotionalInsightsRequest> {
        self.insight_requests.lock().unwrap().clone()
    }

    pub fn mood_calls(&self) -> u32 {
        *self.mood_calls.lock().unwrap()
    }
}

#[async_trait]
impl NarrativeGenerator for ScriptedNarrator {
    async fn mentor_response(
        &self,
        _mentor: MentorKind,
        _entry: &str,
        context: &UserContext,
    ) -> Result<MentorResponse, DomainError> {
        self.mentor_contexts.lock().unwrap().push(context.clone());
        self.mentor.clone().ok_or_else(unavailable)
    }

    async fn progress_narrative(
        &self,
        request: &ProgressNarrativeRequest,
    ) -> Result<ProgressNarrative, DomainError> {
        self.narrative_requests.lock().unwrap().push(request.clone());
        tokio::time::sleep(self.delay).await;
        self.narrative.clone().ok_or_else(unavailable)
    }

    async fn emotional_insights(
        &self,
        request: &EmotionalInsightsRequest,
    ) -> Result<EmotionalInsights, DomainError> {
        self.insight_requests.lock().unwrap().push(request.clone());
        tokio::time::sleep(self.delay).await;
        self.insights.clone().ok_or_else(unavailable)
    }

    async fn classify_mood(&self, _entry: &str) -> Result<Mood, DomainError> {
        *self.mood_calls.lock().unwrap() += 1;
        self.mood.ok_or_else(unavailable)
    }
}
