//! Journal entry handlers.

mod create_entry;
mod list_entries;
mod update_entry;

pub use create_entry::{
    CreateJournalEntryCommand, CreateJournalEntryHandler, CreateJournalEntryResult,
};
pub use list_entries::{ListJournalEntriesHandler, ListJournalEntriesQuery};
pub use update_entry::{UpdateJournalEntryCommand, UpdateJournalEntryHandler};
