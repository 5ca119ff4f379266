//! Weekly mood trend and monthly coverage.

use crate::domain::foundation::Timestamp;

use super::entry::JournalEntryRecord;
use super::metrics::round_half_up;

fn average_score<'a>(entries: impl Iterator<Item = &'a JournalEntryRecord>) -> Option<f64> {
    let (sum, count) = entries.fold((0u64, 0u64), |(sum, count), e| {
        (sum + u64::from(e.effective_mood().score()), count + 1)
    });
    (count > 0).then(|| sum as f64 / count as f64)
}

/// Average mood of the last 7 days minus the average of the 7 days before.
///
/// An empty window takes the other window's average; when both are empty
/// both take `overall_average`. The delta is therefore 0 unless both windows
/// hold entries.
pub fn weekly_trend(entries: &[JournalEntryRecord], now: Timestamp, overall_average: f64) -> i64 {
    let one_week_ago = now.minus_days(7);
    let two_weeks_ago = now.minus_days(14);

    let dated = || entries.iter().filter_map(|e| e.created_at.map(|ts| (e, ts)));

    let recent = average_score(
        dated()
            .filter(|(_, ts)| *ts >= one_week_ago)
            .map(|(e, _)| e),
    );
    let previous = average_score(
        dated()
            .filter(|(_, ts)| *ts >= two_weeks_ago && *ts < one_week_ago)
            .map(|(e, _)| e),
    );

    let (recent, previous) = match (recent, previous) {
        (Some(r), Some(p)) => (r, p),
        (Some(r), None) => (r, r),
        (None, Some(p)) => (p, p),
        (None, None) => (overall_average, overall_average),
    };

    round_half_up(recent - previous)
}

/// Entries in the trailing 30 days as a percentage of 30.
///
/// Not clamped: more than one entry per day pushes it past 100.
pub fn monthly_growth(entries: &[JournalEntryRecord], now: Timestamp) -> u32 {
    let one_month_ago = now.minus_days(30);
    let count = entries
        .iter()
        .filter_map(|e| e.created_at)
        .filter(|ts| *ts >= one_month_ago)
        .count();
    round_half_up(count as f64 / 30.0 * 100.0).max(0) as u32
}
