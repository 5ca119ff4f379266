//! NarrativeGenerator adapters.

mod llm_generator;

pub use llm_generator::LlmNarrativeGenerator;
