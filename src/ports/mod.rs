//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - LLM completions
//! - `NarrativeGenerator` - Mentor replies, narratives, insights, mood labels
//! - `JournalEntryRepository` - Journal entry persistence
//! - `AssessmentRepository` - Assessment persistence

mod ai_provider;
mod assessment_repository;
mod journal_entry_repository;
mod narrative_generator;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use assessment_repository::AssessmentRepository;
pub use journal_entry_repository::JournalEntryRepository;
pub use narrative_generator::{
    EmotionalInsightsRequest, NarrativeEntry, NarrativeGenerator, ProgressNarrativeRequest,
};
