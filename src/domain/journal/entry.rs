//! Journal entry aggregate.
//!
//! Entries belong to one user. Ids are serial and assigned on insert, so a
//! new entry starts life as a `NewJournalEntry` and becomes a `JournalEntry`
//! once stored.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, EntryId, Timestamp, UserId, ValidationError};
use crate::domain::mentor::MentorKind;
use crate::domain::progress::{JournalEntryRecord, Mood};

use super::sanitize::sanitize_text;

/// Maximum entry length in characters, after sanitising.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Sanitises raw content and checks it is 1..=10000 characters.
pub fn validate_content(raw: &str) -> Result<String, ValidationError> {
    let content = sanitize_text(raw);
    let length = content.chars().count();
    if length == 0 {
        return Err(ValidationError::empty_field("content"));
    }
    if length > MAX_CONTENT_LENGTH {
        return Err(ValidationError::out_of_range(
            "content",
            1,
            MAX_CONTENT_LENGTH as i32,
            length.min(i32::MAX as usize) as i32,
        ));
    }
    Ok(content)
}

/// Validated input for creating an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournalEntry {
    pub user_id: UserId,
    pub content: String,
    pub mood: Option<Mood>,
    pub selected_mentor: Option<MentorKind>,
}

impl NewJournalEntry {
    /// # Errors
    ///
    /// - `ValidationFailed` if content is empty after sanitising or too long
    pub fn new(
        user_id: UserId,
        raw_content: &str,
        mood: Option<Mood>,
        selected_mentor: Option<MentorKind>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            user_id,
            content: validate_content(raw_content)?,
            mood,
            selected_mentor,
        })
    }
}

/// Partial update of an existing entry. At least one field is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntryUpdate {
    content: Option<String>,
    mood: Option<Mood>,
    selected_mentor: Option<MentorKind>,
}

impl JournalEntryUpdate {
    /// # Errors
    ///
    /// - `ValidationFailed` if every field is absent or content is invalid
    pub fn new(
        raw_content: Option<&str>,
        mood: Option<Mood>,
        selected_mentor: Option<MentorKind>,
    ) -> Result<Self, DomainError> {
        if raw_content.is_none() && mood.is_none() && selected_mentor.is_none() {
            return Err(DomainError::validation(
                "body",
                "At least one field must be provided for update",
            ));
        }
        let content = raw_content.map(validate_content).transpose()?;
        Ok(Self {
            content,
            mood,
            selected_mentor,
        })
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn selected_mentor(&self) -> Option<MentorKind> {
        self.selected_mentor
    }
}

/// A stored journal entry with its mentor replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    id: EntryId,
    user_id: UserId,
    content: String,
    /// Stored label. Normally one of the four moods, but kept raw.
    mood: Option<String>,
    selected_mentor: Option<MentorKind>,
    sage_response: Option<String>,
    jax_response: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl JournalEntry {
    /// Materialises a freshly inserted entry.
    pub fn from_new(id: EntryId, new: NewJournalEntry, created_at: Timestamp) -> Self {
        Self {
            id,
            user_id: new.user_id,
            content: new.content,
            mood: new.mood.map(|m| m.as_str().to_string()),
            selected_mentor: new.selected_mentor,
            sage_response: None,
            jax_response: None,
            created_at,
            updated_at: created_at,
        }
    }

    /// Reconstitute an entry from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: EntryId,
        user_id: UserId,
        content: String,
        mood: Option<String>,
        selected_mentor: Option<MentorKind>,
        sage_response: Option<String>,
        jax_response: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            content,
            mood,
            selected_mentor,
            sage_response,
            jax_response,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mood(&self) -> Option<&str> {
        self.mood.as_deref()
    }

    pub fn selected_mentor(&self) -> Option<MentorKind> {
        self.selected_mentor
    }

    pub fn sage_response(&self) -> Option<&str> {
        self.sage_response.as_deref()
    }

    pub fn jax_response(&self) -> Option<&str> {
        self.jax_response.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks if the given user owns this entry.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Applies a partial update and bumps `updated_at`.
    pub fn apply(&mut self, update: &JournalEntryUpdate, at: Timestamp) {
        if let Some(content) = update.content() {
            self.content = content.to_string();
        }
        if let Some(mood) = update.mood() {
            self.mood = Some(mood.as_str().to_string());
        }
        if let Some(mentor) = update.selected_mentor() {
            self.selected_mentor = Some(mentor);
        }
        self.updated_at = at;
    }

    /// Stores a mentor's reply text in that mentor's slot.
    pub fn record_mentor_reply(&mut self, mentor: MentorKind, reply: impl Into<String>, at: Timestamp) {
        match mentor {
            MentorKind::Sage => self.sage_response = Some(reply.into()),
            MentorKind::Jax => self.jax_response = Some(reply.into()),
        }
        self.updated_at = at;
    }

    /// Snapshot for the analytics engine.
    pub fn to_record(&self) -> JournalEntryRecord {
        JournalEntryRecord {
            id: self.id,
            content: self.content.clone(),
            mood: self.mood.clone(),
            created_at: Some(self.created_at),
        }
    }
}
