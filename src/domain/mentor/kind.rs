//! Mentor personas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::response::MentorResponse;

const SAGE_PERSONA: &str = "You are Sage, a wise and compassionate AI mentor specializing in emotional wellness and psychology. Your approach is:
- Gentle, understanding, and non-judgmental
- Focus on emotional validation and self-compassion
- Provide insightful questions that help users explore their feelings
- Offer gentle guidance toward emotional regulation and growth
- Use warm, supportive language that makes users feel heard and understood
- Draw from psychology, mindfulness, and emotional intelligence principles
- Help users find their inner wisdom and strength";

const JAX_PERSONA: &str = "You are Jax, a direct and action-oriented AI mentor focused on personal growth and accountability. Your approach is:
- Honest, straightforward, and challenging (but never harsh)
- Focus on practical solutions and concrete next steps
- Push users toward action and positive change
- Call out self-limiting beliefs and patterns constructively
- Use clear, motivating language that inspires action
- Draw from cognitive behavioral therapy and goal-setting psychology
- Help users take responsibility and move forward decisively";

/// The two mentor voices a user can pick for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentorKind {
    /// Compassionate, validation-focused.
    Sage,
    /// Direct, action-focused.
    Jax,
}

impl MentorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MentorKind::Sage => "sage",
            MentorKind::Jax => "jax",
        }
    }

    /// Persona description used as the opening of the mentor prompt.
    pub fn persona(&self) -> &'static str {
        match self {
            MentorKind::Sage => SAGE_PERSONA,
            MentorKind::Jax => JAX_PERSONA,
        }
    }

    /// Adjectives describing the expected reply tone.
    pub fn tone(&self) -> &'static str {
        match self {
            MentorKind::Sage => "compassionate and wise",
            MentorKind::Jax => "direct and actionable",
        }
    }

    /// Closing guidance appended to the mentor prompt.
    pub fn focus(&self) -> &'static str {
        match self {
            MentorKind::Sage => "Focus on emotional validation, gentle exploration, and inner wisdom. If MBTI type is known, adapt your compassionate approach to their personality style (e.g., introverts may need more internal processing time, feeling types need emotional validation, etc.).",
            MentorKind::Jax => "Focus on practical solutions, accountability, and forward momentum. If MBTI type is known, adapt your direct approach to their personality preferences (e.g., thinking types appreciate logical reasoning, judging types like structured plans, etc.).",
        }
    }

    /// Static reply used when generation fails. Keeps the persona's voice.
    pub fn fallback_response(&self) -> MentorResponse {
        match self {
            MentorKind::Sage => MentorResponse::new(
                "I hear you, and I want you to know that sharing your feelings takes courage. Your emotions are valid, and this moment of reflection is already a step toward understanding yourself better.",
                vec!["Self-awareness through journaling".into(), "Courage in emotional expression".into()],
                vec!["Take a few deep breaths".into(), "Practice self-compassion".into()],
            ),
            MentorKind::Jax => MentorResponse::new(
                "I appreciate you being real about what's going on. Now let's focus on what you can actually do about it. Every challenge is an opportunity to grow stronger.",
                vec!["Honesty about current situation".into(), "Recognition of growth potential".into()],
                vec!["Identify one concrete next step".into(), "Take action within 24 hours".into()],
            ),
        }
    }
}

impl fmt::Display for MentorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MentorKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sage" => Ok(MentorKind::Sage),
            "jax" => Ok(MentorKind::Jax),
            other => Err(ValidationError::invalid_format(
                "selected_mentor",
                format!("'{}' is not one of sage, jax", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_mentors_only() {
        assert_eq!("sage".parse::<MentorKind>(), Ok(MentorKind::Sage));
        assert_eq!("jax".parse::<MentorKind>(), Ok(MentorKind::Jax));
        assert!("Sage".parse::<MentorKind>().is_err());
    }

    #[test]
    fn personas_introduce_the_mentor_by_name() {
        assert!(MentorKind::Sage.persona().starts_with("You are Sage"));
        assert!(MentorKind::Jax.persona().starts_with("You are Jax"));
    }

    #[test]
    fn fallbacks_carry_two_insights_and_two_actions() {
        for kind in [MentorKind::Sage, MentorKind::Jax] {
            let reply = kind.fallback_response();
            assert_eq!(reply.emotional_insights.len(), 2);
            assert_eq!(reply.recommended_actions.len(), 2);
        }
        assert!(MentorKind::Sage.fallback_response().response.starts_with("I hear you"));
        assert_eq!(
            MentorKind::Jax.fallback_response().recommended_actions[1],
            "Take action within 24 hours"
        );
    }
}
