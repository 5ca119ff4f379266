//! UpdateJournalEntryHandler - Command handler for editing an entry.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EntryId, ErrorCode, Timestamp, UserId};
use crate::domain::journal::{JournalEntry, JournalEntryUpdate};
use crate::domain::mentor::MentorKind;
use crate::domain::progress::Mood;
use crate::ports::JournalEntryRepository;

/// Command to change some fields of an entry.
#[derive(Debug, Clone)]
pub struct UpdateJournalEntryCommand {
    pub user_id: UserId,
    pub entry_id: EntryId,
    pub content: Option<String>,
    pub mood: Option<Mood>,
    pub selected_mentor: Option<MentorKind>,
}

pub struct UpdateJournalEntryHandler {
    repository: Arc<dyn JournalEntryRepository>,
}

impl UpdateJournalEntryHandler {
    pub fn new(repository: Arc<dyn JournalEntryRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if no field is given or the content is invalid
    /// - `EntryNotFound` if the entry does not exist or belongs to someone else
    pub async fn handle(&self, cmd: UpdateJournalEntryCommand) -> Result<JournalEntry, DomainError> {
        let update = JournalEntryUpdate::new(cmd.content.as_deref(), cmd.mood, cmd.selected_mentor)?;

        let mut entry = self
            .repository
            .find_by_id(cmd.entry_id)
            .await?
            .filter(|e| e.is_owned_by(&cmd.user_id))
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::EntryNotFound,
                    format!("Journal entry {} not found", cmd.entry_id),
                )
            })?;

        entry.apply(&update, Timestamp::now());
        self.repository.update(&entry).await?;

        tracing::info!(user_id = %cmd.user_id, entry_id = %entry.id(), "Journal entry updated");
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryJournalEntryRepository;
    use crate::domain::journal::NewJournalEntry;

    async fn seeded() -> (Arc<InMemoryJournalEntryRepository>, EntryId) {
        let repo = Arc::new(InMemoryJournalEntryRepository::new());
        let new = NewJournalEntry::new(
            UserId::new("owner").unwrap(),
            "Original",
            Some(Mood::Neutral),
            None,
        )
        .unwrap();
        let id = repo.create(&new).await.unwrap().id();
        (repo, id)
    }

    fn command(user: &str, id: EntryId) -> UpdateJournalEntryCommand {
        UpdateJournalEntryCommand {
            user_id: UserId::new(user).unwrap(),
            entry_id: id,
            content: Some("Edited <b>".to_string()),
            mood: None,
            selected_mentor: None,
        }
    }

    #[tokio::test]
    async fn owner_can_edit_content() {
        let (repo, id) = seeded().await;
        let handler = UpdateJournalEntryHandler::new(repo.clone());

        let updated = handler.handle(command("owner", id)).await.unwrap();

        assert_eq!(updated.content(), "Edited b");
        assert_eq!(updated.mood(), Some("neutral"));
        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.content(), "Edited b");
    }

    #[tokio::test]
    async fn other_users_see_not_found() {
        let (repo, id) = seeded().await;
        let handler = UpdateJournalEntryHandler::new(repo);

        let err = handler.handle(command("intruder", id)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::EntryNotFound);
    }

    #[tokio::test]
    async fn unknown_entry_is_not_found() {
        let (repo, _) = seeded().await;
        let handler = UpdateJournalEntryHandler::new(repo);

        let err = handler
            .handle(command("owner", EntryId::new(999)))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EntryNotFound);
    }

    #[tokio::test]
    async fn empty_update_is_rejected() {
        let (repo, id) = seeded().await;
        let handler = UpdateJournalEntryHandler::new(repo);
        let mut cmd = command("owner", id);
        cmd.content = None;

        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
