//! Progress Module - Analytics over a user's journal history.
//!
//! # Components
//!
//! - `ProgressAnalyzer` - Entry point producing `ProgressMetrics`
//! - `StreakCalculator` - Current and longest day streaks
//! - `consistency_score` - Entries per calendar day of the covered span
//! - `weekly_trend` / `monthly_growth` - Rolling-window mood delta and coverage
//! - `EmotionalIntelligenceScorer` - Keyword-density sub-scores
//! - `mood_trends` - Chronological series for charting
//!
//! Everything here is pure. Malformed entries are absorbed with defaults
//! (neutral mood, exclusion from date math) instead of raising errors.

mod analyzer;
mod consistency;
mod emotional_intelligence;
mod entry;
mod metrics;
mod mood;
mod mood_trend;
mod streaks;
mod trends;

pub use analyzer::ProgressAnalyzer;
pub use consistency::consistency_score;
pub use emotional_intelligence::{
    EmotionalIntelligenceScorer, EmotionalIntelligenceScores, MINDFULNESS_KEYWORDS,
    REGULATION_KEYWORDS, SELF_AWARENESS_KEYWORDS,
};
pub use entry::JournalEntryRecord;
pub use metrics::{round_half_up, ProgressMetrics};
pub use mood::{Mood, MoodDistribution};
pub use mood_trend::{mood_trends, MoodTrendPoint};
pub use streaks::{StreakCalculator, Streaks};
pub use trends::{monthly_growth, weekly_trend};
