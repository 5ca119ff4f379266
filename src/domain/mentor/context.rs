//! Personal context handed to text generation.

use crate::domain::personality::JournalingInsights;

/// Characters of each previous entry passed as mentor context.
pub const PREVIOUS_ENTRY_EXCERPT_CHARS: usize = 100;

/// What the mentor knows about the writer besides the current entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    pub mbti_type: Option<String>,
    /// Short excerpts of earlier entries, newest first.
    pub previous_entries: Vec<String>,
}

impl UserContext {
    pub fn new(mbti_type: Option<String>, previous_entries: Vec<String>) -> Self {
        Self {
            mbti_type,
            previous_entries,
        }
    }

    /// Journaling insights for the known type, if any.
    pub fn journaling_insights(&self) -> Option<JournalingInsights> {
        self.mbti_type.as_deref().map(JournalingInsights::for_type)
    }
}

/// First `max_chars` characters of `text`, on a char boundary.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("héllo wörld", 4), "héll");
        assert_eq!(excerpt("short", 100), "short");
    }

    #[test]
    fn insights_only_with_known_type() {
        assert!(UserContext::default().journaling_insights().is_none());
        let ctx = UserContext::new(Some("INTP".into()), vec![]);
        assert!(ctx
            .journaling_insights()
            .unwrap()
            .journaling_style
            .starts_with("Your journaling is analytical"));
    }
}
