//! Mentor Module - Personas, replies and progress narratives.
//!
//! The text itself comes from a `NarrativeGenerator`; this module owns the
//! static parts: persona prompts, fallback replies and fallback narratives
//! and insights.

mod context;
mod kind;
mod narrative;
mod response;

pub use context::{excerpt, UserContext, PREVIOUS_ENTRY_EXCERPT_CHARS};
pub use kind::MentorKind;
pub use narrative::{EmotionalInsights, NarrativeSource, ProgressNarrative};
pub use response::{MentorResponse, DEFAULT_MENTOR_REPLY};
