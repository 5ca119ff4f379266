//! Emotional insight handlers.

mod get_emotional_insights;

pub use get_emotional_insights::{
    EmotionalInsightsReport, GetEmotionalInsightsHandler, GetEmotionalInsightsQuery,
};
