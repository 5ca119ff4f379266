//! LLM-backed NarrativeGenerator.
//!
//! Builds the mentor, narrative, insight and mood prompts, sends them through an
//! `AIProvider` and parses the replies leniently: missing or mistyped JSON
//! fields fall back to defaults, only an unparseable body is an error.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::mentor::{
    EmotionalInsights, MentorKind, MentorResponse, ProgressNarrative, UserContext,
};
use crate::domain::personality::JournalingInsights;
use crate::domain::progress::{Mood, ProgressMetrics};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, EmotionalInsightsRequest, MessageRole, NarrativeEntry,
    NarrativeGenerator, ProgressNarrativeRequest, RequestMetadata,
};

const MENTOR_SYSTEM_PROMPT: &str = "You are an expert AI mentor specializing in emotional wellness and personal development. Respond only with valid JSON in the specified format.";

const NARRATIVE_SYSTEM_PROMPT: &str = "You are an expert in emotional intelligence and psychology. Provide constructive insights based on journal patterns and progress metrics.";

const INSIGHTS_SYSTEM_PROMPT: &str = "You are an expert in emotional intelligence and psychology. Provide constructive insights based on journal patterns.";

const MOOD_SYSTEM_PROMPT: &str = "Analyze the emotional tone of this journal entry and categorize it as one of: positive, negative, mixed, or neutral. Respond only with the category word.";

/// Previous entries quoted in a mentor prompt.
const MENTOR_HISTORY_ITEMS: usize = 3;

/// Entries and characters per entry quoted in a narrative prompt.
const NARRATIVE_ENTRIES: usize = 10;
const NARRATIVE_ENTRY_CHARS: usize = 200;

pub struct LlmNarrativeGenerator {
    ai_provider: Arc<dyn AIProvider>,
}

impl LlmNarrativeGenerator {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    async fn complete_text(&self, request: CompletionRequest) -> Result<String, DomainError> {
        let operation = request.metadata.operation;
        self.ai_provider
            .complete(request)
            .await
            .map(|response| response.content)
            .map_err(|e| provider_error(operation, e))
    }
}

fn provider_error(operation: &str, err: AIError) -> DomainError {
    let code = match err {
        AIError::RateLimited { .. } => ErrorCode::RateLimited,
        _ => ErrorCode::AIProviderError,
    };
    DomainError::new(code, format!("AI provider error: {}", err)).with_detail("operation", operation)
}

fn parse_json_object(body: &str) -> Result<serde_json::Map<String, Value>, DomainError> {
    match serde_json::from_str::<Value>(body.trim()) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DomainError::new(
            ErrorCode::AIProviderError,
            "AI response is not a JSON object",
        )),
        Err(e) => Err(DomainError::new(
            ErrorCode::AIProviderError,
            format!("Failed to parse AI response: {}", e),
        )),
    }
}

/// String items of a JSON array field; anything else yields `None`.
fn string_list(map: &serde_json::Map<String, Value>, key: &str) -> Option<Vec<String>> {
    map.get(key).and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    })
}

fn parse_mentor_response(body: &str) -> Result<MentorResponse, DomainError> {
    let map = parse_json_object(body)?;
    Ok(MentorResponse::from_parts(
        map.get("response").and_then(Value::as_str).map(str::to_string),
        string_list(&map, "emotionalInsights"),
        string_list(&map, "recommendedActions"),
    ))
}

fn parse_progress_narrative(body: &str) -> Result<ProgressNarrative, DomainError> {
    let map = parse_json_object(body)?;
    Ok(ProgressNarrative {
        patterns: string_list(&map, "patterns").unwrap_or_default(),
        growth_areas: string_list(&map, "growthAreas").unwrap_or_default(),
        strengths: string_list(&map, "strengths").unwrap_or_default(),
        recommendations: string_list(&map, "recommendations").unwrap_or_default(),
    })
}

fn parse_emotional_insights(body: &str) -> Result<EmotionalInsights, DomainError> {
    let map = parse_json_object(body)?;
    Ok(EmotionalInsights {
        patterns: string_list(&map, "patterns").unwrap_or_default(),
        growth_areas: string_list(&map, "growthAreas").unwrap_or_default(),
        strengths: string_list(&map, "strengths").unwrap_or_default(),
    })
}

fn parse_mood(body: &str) -> Mood {
    body.trim().to_lowercase().parse().unwrap_or(Mood::Neutral)
}

fn mentor_mbti_context(mbti_type: &str, insights: &JournalingInsights) -> String {
    format!(
        "The user's MBTI type is {t}.\n\n\
         MBTI Context for personalized response:\n\
         - Emotional processing style: {processing}\n\
         - Stress signals to watch for: {signals}\n\
         - Journaling style: {style}\n\n\
         Tailor your response to their {t} personality traits and emotional processing style.",
        t = mbti_type,
        processing = insights.emotional_processing,
        signals = insights.stress_signals.join(", "),
        style = insights.journaling_style,
    )
}

fn mentor_prompt(mentor: MentorKind, entry: &str, context: &UserContext) -> String {
    let mbti = context.mbti_type.as_deref();
    let mbti_context = match (mbti, context.journaling_insights()) {
        (Some(t), Some(insights)) => mentor_mbti_context(t, &insights),
        _ => String::new(),
    };
    let history = if context.previous_entries.is_empty() {
        String::new()
    } else {
        let themes: Vec<&str> = context
            .previous_entries
            .iter()
            .take(MENTOR_HISTORY_ITEMS)
            .map(String::as_str)
            .collect();
        format!("Previous journal themes: {}", themes.join("; "))
    };

    let reply_hint = match mbti {
        Some(t) => format!(" Tailor your response style to their {} personality type.", t),
        None => String::new(),
    };
    let (insight_1, insight_2, action_1, action_2) = match mbti {
        Some(t) => (
            format!(" (considering their {} traits)", t),
            " (personality-aware)".to_string(),
            format!("MBTI-appropriate action based on their {} style", t),
            "personality-tailored",
        ),
        None => (
            String::new(),
            String::new(),
            "Specific action they can take".to_string(),
            "helpful",
        ),
    };

    format!(
        "{persona}\n\n\
         Context: {mbti_context}\n\
         {history}\n\n\
         The user has written this journal entry:\n\
         \"{entry}\"\n\n\
         Provide a response in JSON format with:\n\
         {{\n  \
           \"response\": \"Your {tone} response to their journal entry (2-3 sentences).{reply_hint}\",\n  \
           \"emotionalInsights\": [\"Key emotional insight 1{insight_1}\", \"Key emotional insight 2{insight_2}\"],\n  \
           \"recommendedActions\": [\"{action_1}\", \"Another {action_2} suggestion\"]\n\
         }}\n\n\
         {focus}",
        persona = mentor.persona(),
        tone = mentor.tone(),
        focus = mentor.focus(),
    )
}

fn narrative_mbti_context(mbti_type: &str, insights: &JournalingInsights) -> String {
    format!(
        "User's MBTI type: {t}\n\n\
         MBTI-specific insights:\n\
         - Emotional processing style: {processing}\n\
         - Stress response patterns: {signals}\n\
         - Growth areas specific to {t}: Consider their personality type when identifying patterns and recommendations.",
        t = mbti_type,
        processing = insights.emotional_processing,
        signals = insights.stress_signals.join(", "),
    )
}

fn metrics_context(metrics: &ProgressMetrics) -> String {
    let sign = if metrics.weekly_trend > 0 { "+" } else { "" };
    format!(
        "\nCurrent Progress Metrics:\n\
         - Self-awareness: {}%\n\
         - Emotional regulation: {}%\n\
         - Mindfulness: {}%\n\
         - Consistency: {}%\n\
         - Current streak: {} days\n\
         - Average mood: {}/100\n\
         - Weekly trend: {}{}",
        metrics.self_awareness.value(),
        metrics.emotional_regulation.value(),
        metrics.mindfulness.value(),
        metrics.consistency_score.value(),
        metrics.current_streak,
        metrics.average_mood_score.value(),
        sign,
        metrics.weekly_trend,
    )
}

fn entries_text(entries: &[NarrativeEntry]) -> String {
    entries
        .iter()
        .take(NARRATIVE_ENTRIES)
        .enumerate()
        .map(|(i, entry)| {
            let content: String = entry.content.chars().take(NARRATIVE_ENTRY_CHARS).collect();
            format!(
                "Entry {} ({}): {}...",
                i + 1,
                entry.mood.as_deref().unwrap_or("unknown mood"),
                content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn narrative_prompt(request: &ProgressNarrativeRequest) -> String {
    let mbti = request.mbti_type.as_deref();
    let mbti_context = mbti
        .map(|t| narrative_mbti_context(t, &JournalingInsights::for_type(t)))
        .unwrap_or_default();
    let tag = |with: String| if mbti.is_some() { with } else { String::new() };
    let t = mbti.unwrap_or_default();

    format!(
        "Analyze these recent journal entries for emotional patterns and provide personalized growth insights:\n\n\
         {mbti_context}{metrics}\n\n\
         Recent Entries:\n\
         {entries}\n\n\
         Provide analysis in JSON format:\n\
         {{\n  \
           \"patterns\": [\"Observable emotional or behavioral pattern{p1}\", \"Another pattern{p2}\"],\n  \
           \"growthAreas\": [\"Area for emotional development{g1}\", \"Another growth opportunity{g2}\"],\n  \
           \"strengths\": [\"Emotional strength or positive trait{s1}\", \"Another strength{s2}\"],\n  \
           \"recommendations\": [\"Specific actionable recommendation{r1}\", \"Another targeted suggestion{r2}\"]\n\
         }}\n\n\
         Focus on constructive, actionable insights that promote emotional growth. {closing} Consider their current progress metrics when making recommendations.",
        metrics = metrics_context(&request.metrics),
        entries = entries_text(&request.entries),
        p1 = tag(format!(" (consider {} traits)", t)),
        p2 = tag(" (personality-aware)".into()),
        g1 = tag(format!(" tailored to {} type", t)),
        g2 = tag(" (MBTI-appropriate)".into()),
        s1 = tag(format!(" leveraging {} strengths", t)),
        s2 = tag(" (personality-based)".into()),
        r1 = tag(format!(" suited to {}", t)),
        r2 = tag(" (personality-appropriate)".into()),
        closing = tag(format!("Tailor insights to their {} personality type characteristics.", t)),
    )
}

fn insights_prompt(request: &EmotionalInsightsRequest) -> String {
    let mbti = request.mbti_type.as_deref();
    let mbti_context = mbti
        .map(|t| narrative_mbti_context(t, &JournalingInsights::for_type(t)))
        .unwrap_or_default();
    let tag = |with: String| if mbti.is_some() { with } else { String::new() };
    let t = mbti.unwrap_or_default();

    format!(
        "Analyze these recent journal entries for emotional patterns and growth insights:\n\n\
         {mbti_context}\n\n\
         Recent Entries:\n\
         {entries}\n\n\
         Provide analysis in JSON format:\n\
         {{\n  \
           \"patterns\": [\"Observable emotional or behavioral pattern{p1}\", \"Another pattern{p2}\"],\n  \
           \"growthAreas\": [\"Area for emotional development{g1}\", \"Another growth opportunity{g2}\"],\n  \
           \"strengths\": [\"Emotional strength or positive trait{s1}\", \"Another strength{s2}\"]\n\
         }}\n\n\
         Focus on constructive, actionable insights that promote emotional growth. {closing}",
        entries = entries_text(&request.entries),
        p1 = tag(format!(" (consider {} traits)", t)),
        p2 = tag(" (personality-aware)".into()),
        g1 = tag(format!(" tailored to {} type", t)),
        g2 = tag(" (MBTI-appropriate)".into()),
        s1 = tag(format!(" leveraging {} strengths", t)),
        s2 = tag(" (personality-based)".into()),
        closing = tag(format!("Tailor insights to their {} personality type characteristics.", t)),
    )
}

#[async_trait]
impl NarrativeGenerator for LlmNarrativeGenerator {
    async fn mentor_response(
        &self,
        mentor: MentorKind,
        entry: &str,
        context: &UserContext,
    ) -> Result<MentorResponse, DomainError> {
        let request = CompletionRequest::new(RequestMetadata::new("mentor_reply"))
            .with_system_prompt(MENTOR_SYSTEM_PROMPT)
            .with_message(MessageRole::User, mentor_prompt(mentor, entry, context))
            .with_temperature(0.7)
            .with_max_tokens(500)
            .with_json_response();

        let body = self.complete_text(request).await?;
        parse_mentor_response(&body)
    }

    async fn progress_narrative(
        &self,
        request: &ProgressNarrativeRequest,
    ) -> Result<ProgressNarrative, DomainError> {
        let completion = CompletionRequest::new(
            RequestMetadata::new("progress_narrative").for_user(request.user_id.clone()),
        )
        .with_system_prompt(NARRATIVE_SYSTEM_PROMPT)
        .with_message(MessageRole::User, narrative_prompt(request))
        .with_temperature(0.6)
        .with_max_tokens(500)
        .with_json_response();

        let body = self.complete_text(completion).await?;
        parse_progress_narrative(&body)
    }

    async fn emotional_insights(
        &self,
        request: &EmotionalInsightsRequest,
    ) -> Result<EmotionalInsights, DomainError> {
        let completion = CompletionRequest::new(
            RequestMetadata::new("emotional_insights").for_user(request.user_id.clone()),
        )
        .with_system_prompt(INSIGHTS_SYSTEM_PROMPT)
        .with_message(MessageRole::User, insights_prompt(request))
        .with_temperature(0.6)
        .with_max_tokens(400)
        .with_json_response();

        let body = self.complete_text(completion).await?;
        parse_emotional_insights(&body)
    }

    async fn classify_mood(&self, entry: &str) -> Result<Mood, DomainError> {
        let request = CompletionRequest::new(RequestMetadata::new("classify_mood"))
            .with_system_prompt(MOOD_SYSTEM_PROMPT)
            .with_message(MessageRole::User, entry)
            .with_temperature(0.3)
            .with_max_tokens(10);

        let body = self.complete_text(request).await?;
        Ok(parse_mood(&body))
    }
}
