//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `personality` - Questionnaire catalog and MBTI classification
//! - `progress` - Analytics over journal history (mood, streaks, trends)
//! - `journal` - Journal entry aggregate and input validation
//! - `mentor` - Mentor personas, replies and progress narratives
//! - `assessment` - Stored assessment records

pub mod assessment;
pub mod foundation;
pub mod journal;
pub mod mentor;
pub mod personality;
pub mod progress;
