//! Progress Analyzer - Composes the individual metric calculations.

use chrono::{FixedOffset, NaiveDate, Offset, Utc};

use crate::domain::foundation::{Percentage, Timestamp};

use super::consistency::consistency_score;
use super::emotional_intelligence::EmotionalIntelligenceScorer;
use super::entry::JournalEntryRecord;
use super::metrics::{mean_mood_score, mood_distribution, round_half_up, ProgressMetrics};
use super::mood_trend::{mood_trends, MoodTrendPoint};
use super::streaks::StreakCalculator;
use super::trends::{monthly_growth, weekly_trend};

/// Computes `ProgressMetrics` from a journal history.
///
/// Calendar days (streaks, consistency) are taken in the configured UTC
/// offset. Rolling windows (weekly trend, monthly growth) are exact spans
/// back from `now`.
#[derive(Debug, Clone, Copy)]
pub struct ProgressAnalyzer {
    offset: FixedOffset,
}

impl Default for ProgressAnalyzer {
    fn default() -> Self {
        Self::utc()
    }
}

impl ProgressAnalyzer {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Analyzer that treats UTC dates as local dates.
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Analyzes entries as of the current moment.
    pub fn analyze(&self, entries: &[JournalEntryRecord]) -> ProgressMetrics {
        self.analyze_at(entries, Timestamp::now())
    }

    /// Analyzes entries as of `now`.
    ///
    /// Never fails: missing timestamps drop an entry from date-based metrics
    /// and missing or unknown moods count as neutral.
    pub fn analyze_at(&self, entries: &[JournalEntryRecord], now: Timestamp) -> ProgressMetrics {
        let Some(mean) = mean_mood_score(entries) else {
            return ProgressMetrics::empty();
        };

        let dates_newest_first = self.local_dates_newest_first(entries);
        let today = now.local_date(&self.offset);
        let streaks = StreakCalculator::compute(&dates_newest_first, today);
        let ei = EmotionalIntelligenceScorer::score(entries);

        ProgressMetrics {
            self_awareness: ei.self_awareness,
            emotional_regulation: ei.emotional_regulation,
            mindfulness: ei.mindfulness,
            consistency_score: consistency_score(&dates_newest_first),
            total_entries: entries.len() as u32,
            current_streak: streaks.current,
            longest_streak: streaks.longest,
            average_mood_score: Percentage::clamped(round_half_up(mean)),
            mood_distribution: mood_distribution(entries),
            weekly_trend: weekly_trend(entries, now, mean),
            monthly_growth: monthly_growth(entries, now),
        }
    }

    /// Chronological mood series, dated in UTC.
    pub fn mood_trends(&self, entries: &[JournalEntryRecord]) -> Vec<MoodTrendPoint> {
        mood_trends(entries)
    }

    fn local_dates_newest_first(&self, entries: &[JournalEntryRecord]) -> Vec<NaiveDate> {
        let mut stamps: Vec<Timestamp> = entries.iter().filter_map(|e| e.created_at).collect();
        stamps.sort_by(|a, b| b.cmp(a));
        stamps
            .into_iter()
            .map(|ts| ts.local_date(&self.offset))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EntryId;
    use chrono::{TimeZone, Utc};

    fn now() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 8, 20, 15, 0, 0).unwrap())
    }

    fn dated(id: i64, mood: &str, days_ago: i64) -> JournalEntryRecord {
        JournalEntryRecord::new(EntryId::new(id), "a quiet day")
            .with_mood(mood)
            .with_created_at(now().minus_days(days_ago))
    }

    #[test]
    fn empty_history_is_all_zero() {
        let metrics = ProgressAnalyzer::utc().analyze_at(&[], now());
        assert_eq!(metrics, ProgressMetrics::empty());
        assert_eq!(metrics.total_entries, 0);
        assert_eq!(metrics.mood_distribution.positive, Percentage::ZERO);
    }

    #[test]
    fn three_moods_give_thirds_and_average_57() {
        let entries = vec![
            dated(1, "positive", 0),
            dated(2, "negative", 1),
            dated(3, "neutral", 2),
        ];
        let metrics = ProgressAnalyzer::utc().analyze_at(&entries, now());

        assert_eq!(metrics.mood_distribution.positive.value(), 33);
        assert_eq!(metrics.mood_distribution.negative.value(), 33);
        assert_eq!(metrics.mood_distribution.neutral.value(), 33);
        assert_eq!(metrics.mood_distribution.mixed.value(), 0);
        assert_eq!(metrics.average_mood_score.value(), 57);
        assert_eq!(metrics.total_entries, 3);
    }

    #[test]
    fn consecutive_days_ending_today() {
        let entries = vec![
            dated(1, "neutral", 2),
            dated(2, "neutral", 0),
            dated(3, "neutral", 1),
        ];
        let metrics = ProgressAnalyzer::utc().analyze_at(&entries, now());

        assert_eq!(metrics.current_streak, 3);
        assert_eq!(metrics.longest_streak, 3);
        assert_eq!(metrics.consistency_score.value(), 100);
    }

    #[test]
    fn entries_five_days_apart() {
        let entries = vec![dated(1, "positive", 5), dated(2, "positive", 0)];
        let metrics = ProgressAnalyzer::utc().analyze_at(&entries, now());

        assert_eq!(metrics.longest_streak, 1);
        assert_eq!(metrics.consistency_score.value(), 33);
    }

    #[test]
    fn single_entry_is_fully_consistent() {
        let metrics = ProgressAnalyzer::utc().analyze_at(&[dated(1, "mixed", 200)], now());
        assert_eq!(metrics.consistency_score.value(), 100);
    }

    #[test]
    fn entry_from_yesterday_only_has_no_current_streak() {
        let metrics = ProgressAnalyzer::utc().analyze_at(&[dated(1, "positive", 1)], now());
        assert_eq!(metrics.current_streak, 0);
        assert_eq!(metrics.longest_streak, 1);
    }

    #[test]
    fn undated_entries_only_affect_mood_and_content_metrics() {
        let entries = vec![
            JournalEntryRecord::new(EntryId::new(1), "no date").with_mood("positive"),
            JournalEntryRecord::new(EntryId::new(2), "no date either"),
        ];
        let metrics = ProgressAnalyzer::utc().analyze_at(&entries, now());

        assert_eq!(metrics.total_entries, 2);
        assert_eq!(metrics.average_mood_score.value(), 75);
        assert_eq!(metrics.current_streak, 0);
        assert_eq!(metrics.longest_streak, 0);
        assert_eq!(metrics.consistency_score, Percentage::ZERO);
        assert_eq!(metrics.monthly_growth, 0);
        assert_eq!(metrics.self_awareness.value(), 10);
    }

    #[test]
    fn monthly_growth_is_not_clamped() {
        let entries: Vec<_> = (0..40).map(|i| dated(i, "neutral", i % 20)).collect();
        let metrics = ProgressAnalyzer::utc().analyze_at(&entries, now());
        assert_eq!(metrics.monthly_growth, 133);
    }

    #[test]
    fn offset_moves_the_calendar_day() {
        let at = |d, h| {
            Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 8, d, h, 0, 0).unwrap())
        };
        let entries = vec![
            JournalEntryRecord::new(EntryId::new(1), "morning").with_created_at(at(20, 3)),
            JournalEntryRecord::new(EntryId::new(2), "evening").with_created_at(at(19, 20)),
        ];

        let utc = ProgressAnalyzer::utc().analyze_at(&entries, now());
        assert_eq!(utc.current_streak, 2);
        assert_eq!(utc.longest_streak, 2);

        // At UTC+10 both entries fall on the 20th and "now" is already the 21st
        let plus_ten = ProgressAnalyzer::new(FixedOffset::east_opt(10 * 3600).unwrap());
        let local = plus_ten.analyze_at(&entries, now());
        assert_eq!(local.current_streak, 0);
        assert_eq!(local.longest_streak, 1);
        assert_eq!(local.consistency_score.value(), 100);
    }

    #[test]
    fn weekly_trend_reflects_improvement() {
        let entries = vec![dated(1, "positive", 1), dated(2, "negative", 10)];
        let metrics = ProgressAnalyzer::utc().analyze_at(&entries, now());
        assert_eq!(metrics.weekly_trend, 80);
    }

    #[test]
    fn analysis_is_deterministic_for_fixed_now() {
        let entries = vec![dated(1, "positive", 3), dated(2, "mixed", 4), dated(3, "negative", 12)];
        let analyzer = ProgressAnalyzer::utc();
        assert_eq!(analyzer.analyze_at(&entries, now()), analyzer.analyze_at(&entries, now()));
    }
}
