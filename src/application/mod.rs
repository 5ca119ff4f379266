//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write, query handlers read.

pub mod handlers;

pub use handlers::{
    // Assessment handlers
    CreateAssessmentCommand, CreateAssessmentHandler, GetLatestMbtiHandler, GetLatestMbtiQuery,
    GetQuestionnaireHandler, ListAssessmentsHandler, ListAssessmentsQuery,
    SubmitMbtiAssessmentCommand, SubmitMbtiAssessmentHandler, SubmitMbtiAssessmentResult,
    // Insight handlers
    EmotionalInsightsReport, GetEmotionalInsightsHandler, GetEmotionalInsightsQuery,
    // Journal handlers
    CreateJournalEntryCommand, CreateJournalEntryHandler, CreateJournalEntryResult,
    ListJournalEntriesHandler, ListJournalEntriesQuery, UpdateJournalEntryCommand,
    UpdateJournalEntryHandler,
    // Progress handlers
    GetProgressReportHandler, GetProgressReportQuery, ProgressReport,
};
