//! Journal entry repository port.
//!
//! Entry ids are assigned by the store, so creation takes a
//! `NewJournalEntry` and hands back the stored `JournalEntry`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EntryId, UserId};
use crate::domain::journal::{JournalEntry, NewJournalEntry};

#[async_trait]
pub trait JournalEntryRepository: Send + Sync {
    /// Inserts a new entry and assigns its id and timestamps.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, entry: &NewJournalEntry) -> Result<JournalEntry, DomainError>;

    /// Overwrites a stored entry.
    ///
    /// # Errors
    ///
    /// - `EntryNotFound` if the entry doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, entry: &JournalEntry) -> Result<(), DomainError>;

    /// Find an entry by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: EntryId) -> Result<Option<JournalEntry>, DomainError>;

    /// A user's entries, newest first, at most `limit` of them.
    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<JournalEntry>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_entry_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn JournalEntryRepository) {}
    }
}
