//! ListJournalEntriesHandler - Query handler for recent entries.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::journal::{JournalEntry, ListLimit};
use crate::ports::JournalEntryRepository;

#[derive(Debug, Clone)]
pub struct ListJournalEntriesQuery {
    pub user_id: UserId,
    pub limit: ListLimit,
}

pub struct ListJournalEntriesHandler {
    repository: Arc<dyn JournalEntryRepository>,
}

impl ListJournalEntriesHandler {
    pub fn new(repository: Arc<dyn JournalEntryRepository>) -> Self {
        Self { repository }
    }

    /// Most recent entries first.
    pub async fn handle(
        &self,
        query: ListJournalEntriesQuery,
    ) -> Result<Vec<JournalEntry>, DomainError> {
        self.repository
            .list_recent(&query.user_id, query.limit.value())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryJournalEntryRepository;
    use crate::domain::journal::NewJournalEntry;

    #[tokio::test]
    async fn honours_limit() {
        let repo = Arc::new(InMemoryJournalEntryRepository::new());
        let user = UserId::new("user-1").unwrap();
        for i in 0..3 {
            let new = NewJournalEntry::new(user.clone(), &format!("Entry {}", i), None, None).unwrap();
            repo.create(&new).await.unwrap();
        }
        let handler = ListJournalEntriesHandler::new(repo);

        let entries = handler
            .handle(ListJournalEntriesQuery {
                user_id: user,
                limit: ListLimit::new(Some(2)).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].content(), "Entry 2");
    }
}
