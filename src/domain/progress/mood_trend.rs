//! Chronological mood series for charting.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntryRecord;
use super::mood::Mood;

/// One dated point of the mood series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTrendPoint {
    /// UTC calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Mood label as stored, possibly absent.
    pub mood: Option<String>,
    pub score: u32,
}

/// Maps dated entries, oldest first, to trend points. Undated entries are dropped.
pub fn mood_trends(entries: &[JournalEntryRecord]) -> Vec<MoodTrendPoint> {
    let mut dated: Vec<_> = entries
        .iter()
        .filter_map(|e| e.created_at.map(|ts| (ts, e)))
        .collect();
    dated.sort_by_key(|(ts, _)| *ts);

    dated
        .into_iter()
        .map(|(ts, e)| MoodTrendPoint {
            date: ts.utc_date().format("%Y-%m-%d").to_string(),
            mood: e.mood.clone(),
            score: Mood::from_label(e.mood.as_deref()).score(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EntryId, Timestamp};
    use chrono::{TimeZone, Utc};

    fn at(day: u32, hour: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap())
    }

    #[test]
    fn points_are_sorted_ascending_and_undated_dropped() {
        let entries = vec![
            JournalEntryRecord::new(EntryId::new(1), "a").with_mood("negative").with_created_at(at(5, 9)),
            JournalEntryRecord::new(EntryId::new(2), "b").with_mood("positive"),
            JournalEntryRecord::new(EntryId::new(3), "c").with_created_at(at(2, 23)),
        ];

        let trend = mood_trends(&entries);

        assert_eq!(
            trend,
            vec![
                MoodTrendPoint { date: "2024-03-02".into(), mood: None, score: 50 },
                MoodTrendPoint { date: "2024-03-05".into(), mood: Some("negative".into()), score: 20 },
            ]
        );
    }

    #[test]
    fn unrecognised_label_is_kept_raw_but_scored_neutral() {
        let entries = vec![JournalEntryRecord::new(EntryId::new(1), "x")
            .with_mood("elated")
            .with_created_at(at(1, 0))];
        let trend = mood_trends(&entries);
        assert_eq!(trend[0].mood.as_deref(), Some("elated"));
        assert_eq!(trend[0].score, 50);
    }
}
