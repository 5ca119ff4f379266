//! CreateJournalEntryHandler - Command handler for writing a journal entry.
//!
//! Besides storing the entry this fills in a mood when none was given and,
//! if a mentor was picked, stores that mentor's reply on the entry.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::journal::{JournalEntry, NewJournalEntry};
use crate::domain::mentor::{
    excerpt, MentorKind, MentorResponse, UserContext, PREVIOUS_ENTRY_EXCERPT_CHARS,
};
use crate::domain::progress::Mood;
use crate::ports::{AssessmentRepository, JournalEntryRepository, NarrativeGenerator};

use super::super::assessment::latest_mbti_type;

/// Command to create a journal entry.
#[derive(Debug, Clone)]
pub struct CreateJournalEntryCommand {
    pub user_id: UserId,
    pub content: String,
    pub mood: Option<Mood>,
    pub selected_mentor: Option<MentorKind>,
}

/// Result of entry creation.
#[derive(Debug, Clone)]
pub struct CreateJournalEntryResult {
    pub entry: JournalEntry,
    pub mood: Mood,
    pub mentor_response: Option<MentorResponse>,
}

/// Handler for creating journal entries.
pub struct CreateJournalEntryHandler {
    entries: Arc<dyn JournalEntryRepository>,
    assessments: Arc<dyn AssessmentRepository>,
    narrator: Arc<dyn NarrativeGenerator>,
    /// Entries fetched as mentor context, the new entry included.
    history_limit: u32,
}

impl CreateJournalEntryHandler {
    pub fn new(
        entries: Arc<dyn JournalEntryRepository>,
        assessments: Arc<dyn AssessmentRepository>,
        narrator: Arc<dyn NarrativeGenerator>,
        history_limit: u32,
    ) -> Self {
        Self {
            entries,
            assessments,
            narrator,
            history_limit,
        }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the content is empty after sanitising or too long
    /// - `DatabaseError` if the entry cannot be stored
    ///
    /// Text generation failures never fail the command.
    pub async fn handle(
        &self,
        cmd: CreateJournalEntryCommand,
    ) -> Result<CreateJournalEntryResult, DomainError> {
        let mut new = NewJournalEntry::new(cmd.user_id, &cmd.content, cmd.mood, cmd.selected_mentor)?;

        let mood = match new.mood {
            Some(mood) => mood,
            None => self.classify_mood(&new).await,
        };
        new.mood = Some(mood);

        let mut entry = self.entries.create(&new).await?;
        tracing::info!(
            user_id = %entry.user_id(),
            entry_id = %entry.id(),
            mood = %mood,
            "Journal entry created"
        );

        let mentor_response = match new.selected_mentor {
            Some(mentor) => {
                let reply = self.mentor_reply(mentor, &entry).await?;
                entry.record_mentor_reply(mentor, reply.response.clone(), Timestamp::now());
                self.entries.update(&entry).await?;
                Some(reply)
            }
            None => None,
        };

        Ok(CreateJournalEntryResult {
            entry,
            mood,
            mentor_response,
        })
    }

    async fn classify_mood(&self, new: &NewJournalEntry) -> Mood {
        match self.narrator.classify_mood(&new.content).await {
            Ok(mood) => mood,
            Err(e) => {
                tracing::warn!(user_id = %new.user_id, error = %e, "Mood classification failed, using neutral");
                Mood::Neutral
            }
        }
    }

    async fn mentor_reply(
        &self,
        mentor: MentorKind,
        entry: &JournalEntry,
    ) -> Result<MentorResponse, DomainError> {
        let mbti_type = latest_mbti_type(self.assessments.as_ref(), entry.user_id()).await?;
        let previous_entries = self
            .entries
            .list_recent(entry.user_id(), self.history_limit)
            .await?
            .iter()
            .filter(|e| e.id() != entry.id())
            .map(|e| excerpt(e.content(), PREVIOUS_ENTRY_EXCERPT_CHARS))
            .collect();
        let context = UserContext::new(mbti_type, previous_entries);

        match self
            .narrator
            .mentor_response(mentor, entry.content(), &context)
            .await
        {
            Ok(reply) => Ok(reply),
            Err(e) => {
                tracing::warn!(
                    user_id = %entry.user_id(),
                    mentor = %mentor,
                    error = %e,
                    "Mentor reply failed, using fallback"
                );
                Ok(mentor.fallback_response())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAssessmentRepository, InMemoryJournalEntryRepository};
    use crate::application::handlers::testing::ScriptedNarrator;
    use crate::domain::assessment::{Assessment, AssessmentType, NewAssessment};
    use crate::domain::foundation::{EntryId, ErrorCode};
    use serde_json::json;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    struct Fixture {
        entries: Arc<InMemoryJournalEntryRepository>,
        assessments: Arc<InMemoryAssessmentRepository>,
        narrator: Arc<ScriptedNarrator>,
        handler: CreateJournalEntryHandler,
    }

    fn fixture(narrator: ScriptedNarrator) -> Fixture {
        let entries = Arc::new(InMemoryJournalEntryRepository::new());
        let assessments = Arc::new(InMemoryAssessmentRepository::new());
        let narrator = Arc::new(narrator);
        let handler =
            CreateJournalEntryHandler::new(entries.clone(), assessments.clone(), narrator.clone(), 5);
        Fixture {
            entries,
            assessments,
            narrator,
            handler,
        }
    }

    fn command(content: &str, mood: Option<Mood>, mentor: Option<MentorKind>) -> CreateJournalEntryCommand {
        CreateJournalEntryCommand {
            user_id: user(),
            content: content.to_string(),
            mood,
            selected_mentor: mentor,
        }
    }

    #[tokio::test]
    async fn given_mood_skips_classification() {
        let f = fixture(ScriptedNarrator::failing());

        let result = f
            .handler
            .handle(command("A calm morning", Some(Mood::Positive), None))
            .await
            .unwrap();

        assert_eq!(result.mood, Mood::Positive);
        assert_eq!(result.entry.mood(), Some("positive"));
        assert!(result.mentor_response.is_none());
        assert_eq!(f.narrator.mood_calls(), 0);
    }

    #[tokio::test]
    async fn missing_mood_is_classified() {
        let f = fixture(ScriptedNarrator {
            mood: Some(Mood::Mixed),
            ..Default::default()
        });

        let result = f.handler.handle(command("Ups and downs", None, None)).await.unwrap();

        assert_eq!(result.mood, Mood::Mixed);
        assert_eq!(f.narrator.mood_calls(), 1);
    }

    #[tokio::test]
    async fn classification_failure_defaults_to_neutral() {
        let f = fixture(ScriptedNarrator::failing());

        let result = f.handler.handle(command("Something", None, None)).await.unwrap();

        assert_eq!(result.mood, Mood::Neutral);
        assert_eq!(result.entry.mood(), Some("neutral"));
    }

    #[tokio::test]
    async fn blank_content_is_rejected() {
        let f = fixture(ScriptedNarrator::failing());

        let err = f.handler.handle(command("  <> ", None, None)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(f.entries.is_empty().await);
    }

    #[tokio::test]
    async fn mentor_reply_is_stored_in_its_slot() {
        let reply = MentorResponse::new("Keep going", vec!["Grit".into()], vec!["Walk".into()]);
        let f = fixture(ScriptedNarrator {
            mentor: Some(reply.clone()),
            ..Default::default()
        });

        let result = f
            .handler
            .handle(command("Hard day", Some(Mood::Negative), Some(MentorKind::Jax)))
            .await
            .unwrap();

        assert_eq!(result.mentor_response, Some(reply));
        assert_eq!(result.entry.jax_response(), Some("Keep going"));
        assert_eq!(result.entry.sage_response(), None);

        let stored = f.entries.find_by_id(result.entry.id()).await.unwrap().unwrap();
        assert_eq!(stored.jax_response(), Some("Keep going"));
    }

    #[tokio::test]
    async fn mentor_failure_uses_fallback_reply() {
        let f = fixture(ScriptedNarrator::failing());

        let result = f
            .handler
            .handle(command("Hard day", Some(Mood::Negative), Some(MentorKind::Sage)))
            .await
            .unwrap();

        let fallback = MentorKind::Sage.fallback_response();
        assert_eq!(result.mentor_response.as_ref(), Some(&fallback));
        assert_eq!(result.entry.sage_response(), Some(fallback.response.as_str()));
    }

    #[tokio::test]
    async fn mentor_context_has_type_and_previous_excerpts() {
        let f = fixture(ScriptedNarrator {
            mentor: Some(MentorResponse::new("Ok", vec![], vec![])),
            ..Default::default()
        });
        let mbti = Assessment::create(
            NewAssessment::new(user(), AssessmentType::Mbti, json!({"type": "ENFP"})).unwrap(),
        );
        f.assessments.save(&mbti).await.unwrap();
        for i in 1..=6 {
            let content = format!("{}{}", i, "x".repeat(150));
            let new = NewJournalEntry::new(user(), &content, Some(Mood::Neutral), None).unwrap();
            f.entries
                .insert(JournalEntry::from_new(EntryId::new(i), new, Timestamp::now()))
                .await;
        }

        f.handler
            .handle(command("Today", Some(Mood::Positive), Some(MentorKind::Sage)))
            .await
            .unwrap();

        let contexts = f.narrator.mentor_contexts();
        assert_eq!(contexts.len(), 1);
        let context = &contexts[0];
        assert_eq!(context.mbti_type.as_deref(), Some("ENFP"));
        assert_eq!(context.previous_entries.len(), 4);
        assert!(context
            .previous_entries
            .iter()
            .all(|e| e.chars().count() == PREVIOUS_ENTRY_EXCERPT_CHARS));
        assert!(!context.previous_entries.iter().any(|e| e == "Today"));
    }
}
