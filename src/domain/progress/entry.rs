//! Read-only snapshot of a journal entry as seen by the analytics engine.

use crate::domain::foundation::{EntryId, Timestamp};

use super::mood::Mood;

/// Journal entry fields the analytics engine reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntryRecord {
    pub id: EntryId,
    pub content: String,
    pub mood: Option<String>,
    pub created_at: Option<Timestamp>,
}

impl JournalEntryRecord {
    pub fn new(id: EntryId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            mood: None,
            created_at: None,
        }
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Mood used for scoring, neutral when missing or unrecognised.
    pub fn effective_mood(&self) -> Mood {
        Mood::from_label(self.mood.as_deref())
    }
}
