//! In-memory repository adapters.
//!
//! Used when no database is configured, and throughout the tests.

mod assessment_repository;
mod journal_entry_repository;

pub use assessment_repository::InMemoryAssessmentRepository;
pub use journal_entry_repository::InMemoryJournalEntryRepository;
