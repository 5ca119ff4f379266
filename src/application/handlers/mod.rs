//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod insights;
pub mod journal;
pub mod progress;

#[cfg(test)]
pub(crate) mod testing;

pub use assessment::{
    CreateAssessmentCommand, CreateAssessmentHandler, GetLatestMbtiHandler, GetLatestMbtiQuery,
    GetQuestionnaireHandler, ListAssessmentsHandler, ListAssessmentsQuery,
    SubmitMbtiAssessmentCommand, SubmitMbtiAssessmentHandler, SubmitMbtiAssessmentResult,
};
pub use insights::{
    EmotionalInsightsReport, GetEmotionalInsightsHandler, GetEmotionalInsightsQuery,
};
pub use journal::{
    CreateJournalEntryCommand, CreateJournalEntryHandler, CreateJournalEntryResult,
    ListJournalEntriesHandler, ListJournalEntriesQuery, UpdateJournalEntryCommand,
    UpdateJournalEntryHandler,
};
pub use progress::{GetProgressReportHandler, GetProgressReportQuery, ProgressReport};
