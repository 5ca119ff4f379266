//! HTTP adapter for journal entry endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateJournalEntryRequest, CreateJournalEntryResponse, JournalEntryResponse,
    ListEntriesParams, UpdateJournalEntryRequest,
};
pub use handlers::JournalHandlers;
pub use routes::journal_routes;
