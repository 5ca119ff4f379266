//! Progress metrics result type and shared rounding.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

use super::entry::JournalEntryRecord;
use super::mood::{Mood, MoodDistribution};

/// Rounds to the nearest integer, halves toward positive infinity.
///
/// `-2.5` rounds to `-2`, which `f64::round` would not do.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Wellness metrics derived from a journal history. Recomputed on every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressMetrics {
    pub self_awareness: Percentage,
    pub emotional_regulation: Percentage,
    pub mindfulness: Percentage,
    pub consistency_score: Percentage,
    pub total_entries: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub average_mood_score: Percentage,
    pub mood_distribution: MoodDistribution,
    /// Signed change in average mood score between the last two weeks.
    pub weekly_trend: i64,
    /// Trailing 30-day coverage; may exceed 100.
    pub monthly_growth: u32,
}

impl ProgressMetrics {
    /// Metrics for a user with no entries: every field zero.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Share of entries per effective mood.
pub fn mood_distribution(entries: &[JournalEntryRecord]) -> MoodDistribution {
    if entries.is_empty() {
        return MoodDistribution::default();
    }
    let total = entries.len() as f64;
    let share = |mood: Mood| {
        let count = entries.iter().filter(|e| e.effective_mood() == mood).count();
        Percentage::clamped(round_half_up(count as f64 / total * 100.0))
    };
    MoodDistribution {
        positive: share(Mood::Positive),
        negative: share(Mood::Negative),
        mixed: share(Mood::Mixed),
        neutral: share(Mood::Neutral),
    }
}

/// Mean of the fixed mood scores, unrounded. `None` for an empty slice.
pub fn mean_mood_score(entries: &[JournalEntryRecord]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: u64 = entries
        .iter()
        .map(|e| u64::from(e.effective_mood().score()))
        .sum();
    Some(sum as f64 / entries.len() as f64)
}
