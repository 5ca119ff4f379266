//! In-memory JournalEntryRepository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, EntryId, ErrorCode, Timestamp, UserId};
use crate::domain::journal::{JournalEntry, NewJournalEntry};
use crate::ports::JournalEntryRepository;

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    entries: BTreeMap<EntryId, JournalEntry>,
}

/// Journal entries kept in a map keyed by serial id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJournalEntryRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryJournalEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an entry exactly as given, keeping its id and timestamps.
    ///
    /// Lets tests seed histories with chosen dates.
    pub async fn insert(&self, entry: JournalEntry) {
        let mut store = self.store.write().await;
        store.next_id = store.next_id.max(entry.id().value());
        store.entries.insert(entry.id(), entry);
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl JournalEntryRepository for InMemoryJournalEntryRepository {
    async fn create(&self, entry: &NewJournalEntry) -> Result<JournalEntry, DomainError> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let id = EntryId::new(store.next_id);
        let stored = JournalEntry::from_new(id, entry.clone(), Timestamp::now());
        store.entries.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        match store.entries.get_mut(&entry.id()) {
            Some(existing) => {
                *existing = entry.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::EntryNotFound,
                format!("Journal entry not found: {}", entry.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: EntryId) -> Result<Option<JournalEntry>, DomainError> {
        Ok(self.store.read().await.entries.get(&id).cloned())
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<JournalEntry>, DomainError> {
        let store = self.store.read().await;
        let mut entries: Vec<JournalEntry> = store
            .entries
            .values()
            .filter(|e| e.is_owned_by(user_id))
            .cloned()
            .collect();
        // Newest first; id breaks ties between entries created in the same instant.
        entries.sort_by(|a, b| {
            b.created_at()
                .cmp(a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        entries.truncate(limit as usize);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::progress::Mood;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn new_entry(user_id: &str, content: &str) -> NewJournalEntry {
        NewJournalEntry::new(user(user_id), content, Some(Mood::Neutral), None).unwrap()
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryJournalEntryRepository::new();
        let first = repo.create(&new_entry("a", "one")).await.unwrap();
        let second = repo.create(&new_entry("a", "two")).await.unwrap();

        assert!(second.id() > first.id());
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn list_recent_is_scoped_newest_first_and_limited() {
        let repo = InMemoryJournalEntryRepository::new();
        for content in ["one", "two", "three"] {
            repo.create(&new_entry("a", content)).await.unwrap();
        }
        repo.create(&new_entry("b", "other user")).await.unwrap();

        let listed = repo.list_recent(&user("a"), 2).await.unwrap();
        let contents: Vec<&str> = listed.iter().map(|e| e.content()).collect();
        assert_eq!(contents, vec!["three", "two"]);
    }

    #[tokio::test]
    async fn update_replaces_stored_entry() {
        let repo = InMemoryJournalEntryRepository::new();
        let mut entry = repo.create(&new_entry("a", "draft")).await.unwrap();
        entry.record_mentor_reply(
            crate::domain::mentor::MentorKind::Sage,
            "Kind words",
            Timestamp::now(),
        );
        repo.update(&entry).await.unwrap();

        let found = repo.find_by_id(entry.id()).await.unwrap().unwrap();
        assert_eq!(found.sage_response(), Some("Kind words"));
    }

    #[tokio::test]
    async fn update_of_unknown_entry_fails() {
        let repo = InMemoryJournalEntryRepository::new();
        let other = InMemoryJournalEntryRepository::new();
        let entry = other.create(&new_entry("a", "elsewhere")).await.unwrap();

        let err = repo.update(&entry).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EntryNotFound);
    }

    #[tokio::test]
    async fn seeded_entries_keep_ids_and_advance_counter() {
        let repo = InMemoryJournalEntryRepository::new();
        let seeded = JournalEntry::from_new(EntryId::new(7), new_entry("a", "old"), Timestamp::now());
        repo.insert(seeded).await;

        let created = repo.create(&new_entry("a", "new")).await.unwrap();
        assert_eq!(created.id(), EntryId::new(8));
    }
}
