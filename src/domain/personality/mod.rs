//! Personality Module - MBTI-style questionnaire scoring.
//!
//! # Components
//!
//! - `questionnaire` - Fixed 32-item catalog and the `Response` type
//! - `PersonalityClassifier` - Sums signed item contributions per dimension
//! - `TypeNarrative` - Static description bundle for each of the 16 types
//! - `JournalingInsights` - Static journaling guidance for each type
//! - `validate_responses` - Strict completeness pre-check for submissions
//!
//! All functions are pure. Narrative tables are built once on first use.

mod classifier;
mod dimension;
mod journaling_insights;
mod narrative;
mod questionnaire;
mod validator;

pub use classifier::{DimensionBreakdown, DimensionResult, PersonalityClassifier, PersonalityProfile};
pub use dimension::{Dimension, Polarity, StrengthTier};
pub use journaling_insights::JournalingInsights;
pub use narrative::TypeNarrative;
pub use questionnaire::{
    catalog, find_item, QuestionnaireItem, Response, CATALOG_SIZE, MAX_SCORE, MIN_SCORE,
};
pub use validator::{validate_responses, ResponseSetError};
