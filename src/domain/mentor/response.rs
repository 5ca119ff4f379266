//! Mentor reply to a journal entry.

use serde::{Deserialize, Serialize};

/// Reply used when a generated reply has no usable text.
pub const DEFAULT_MENTOR_REPLY: &str =
    "Thank you for sharing your thoughts. Let me reflect on this with you.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorResponse {
    pub response: String,
    pub emotional_insights: Vec<String>,
    pub recommended_actions: Vec<String>,
}

impl MentorResponse {
    pub fn new(
        response: impl Into<String>,
        emotional_insights: Vec<String>,
        recommended_actions: Vec<String>,
    ) -> Self {
        Self {
            response: response.into(),
            emotional_insights,
            recommended_actions,
        }
    }

    /// Builds a reply from possibly missing generated parts.
    ///
    /// Missing or blank text becomes `DEFAULT_MENTOR_REPLY`; missing lists are empty.
    pub fn from_parts(
        response: Option<String>,
        emotional_insights: Option<Vec<String>>,
        recommended_actions: Option<Vec<String>>,
    ) -> Self {
        let response = response
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MENTOR_REPLY.to_string());
        Self {
            response,
            emotional_insights: emotional_insights.unwrap_or_default(),
            recommended_actions: recommended_actions.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parts_get_defaults() {
        let reply = MentorResponse::from_parts(None, None, Some(vec!["Walk".into()]));
        assert_eq!(reply.response, DEFAULT_MENTOR_REPLY);
        assert!(reply.emotional_insights.is_empty());
        assert_eq!(reply.recommended_actions, vec!["Walk"]);
    }

    #[test]
    fn blank_text_is_replaced() {
        let reply = MentorResponse::from_parts(Some("   ".into()), None, None);
        assert_eq!(reply.response, DEFAULT_MENTOR_REPLY);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(MentorResponse::new("Hi", vec![], vec![])).unwrap();
        assert!(json.get("emotionalInsights").is_some());
        assert!(json.get("recommendedActions").is_some());
    }
}
