//! Keyword-based emotional intelligence sub-scores.
//!
//! A lexical heuristic, not a validated psychometric instrument. The keyword
//! lists and the formula are fixed so results are reproducible.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

use super::entry::JournalEntryRecord;
use super::metrics::round_half_up;

pub const SELF_AWARENESS_KEYWORDS: [&str; 10] = [
    "feel", "realize", "understand", "recognize", "aware", "notice", "reflect", "think", "believe",
    "sense",
];

pub const REGULATION_KEYWORDS: [&str; 10] = [
    "calm", "manage", "control", "cope", "handle", "breathe", "relax", "focus", "center", "balance",
];

pub const MINDFULNESS_KEYWORDS: [&str; 10] = [
    "present", "moment", "mindful", "grateful", "appreciate", "observe", "aware", "conscious",
    "here", "now",
];

/// Per-entry density cap.
const ENTRY_CAP: f64 = 100.0;

/// Credit per entry, up to `MAX_BASELINE_BOOST`.
const BOOST_PER_ENTRY: usize = 5;
const MAX_BASELINE_BOOST: usize = 40;

/// The three lexical sub-scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalIntelligenceScores {
    pub self_awareness: Percentage,
    pub emotional_regulation: Percentage,
    pub mindfulness: Percentage,
}

pub struct EmotionalIntelligenceScorer;

impl EmotionalIntelligenceScorer {
    /// Scores all entries, dated or not.
    pub fn score(entries: &[JournalEntryRecord]) -> EmotionalIntelligenceScores {
        if entries.is_empty() {
            return EmotionalIntelligenceScores::default();
        }

        let mut totals = [0.0f64; 3];
        for entry in entries {
            let content = entry.content.to_lowercase();
            totals[0] += Self::entry_density(&content, &SELF_AWARENESS_KEYWORDS);
            totals[1] += Self::entry_density(&content, &REGULATION_KEYWORDS);
            totals[2] += Self::entry_density(&content, &MINDFULNESS_KEYWORDS);
        }

        let n = entries.len();
        let boost = (n * BOOST_PER_ENTRY).min(MAX_BASELINE_BOOST) as f64;
        let finish = |total: f64| Percentage::clamped(round_half_up(total / n as f64 + boost));

        EmotionalIntelligenceScores {
            self_awareness: finish(totals[0]),
            emotional_regulation: finish(totals[1]),
            mindfulness: finish(totals[2]),
        }
    }

    /// Distinct keywords found as substrings per space-separated word, scaled
    /// by 1000 and capped at 100. `content` must already be lowercase.
    pub fn entry_density(content: &str, keywords: &[&str]) -> f64 {
        // Splitting on single spaces matches how word counts were always taken;
        // an empty string still counts as one word.
        let word_count = content.split(' ').count();
        let hits = keywords.iter().filter(|k| content.contains(*k)).count();
        (hits as f64 / word_count as f64 * 1000.0).min(ENTRY_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EntryId;
    use proptest::prelude::*;

    fn entries(contents: &[&str]) -> Vec<JournalEntryRecord> {
        contents
            .iter()
            .enumerate()
            .map(|(i, c)| JournalEntryRecord::new(EntryId::new(i as i64), *c))
            .collect()
    }

    #[test]
    fn empty_history_scores_zero() {
        assert_eq!(
            EmotionalIntelligenceScorer::score(&[]),
            EmotionalIntelligenceScores::default()
        );
    }

    #[test]
    fn keywordless_entries_get_only_the_baseline() {
        let scores = EmotionalIntelligenceScorer::score(&entries(&["went shopping", "ate lunch"]));
        assert_eq!(scores.self_awareness.value(), 10);
        assert_eq!(scores.emotional_regulation.value(), 10);
        assert_eq!(scores.mindfulness.value(), 10);
    }

    #[test]
    fn density_is_capped_per_entry() {
        // 2 distinct hits in 3 words would be 666
        let density = EmotionalIntelligenceScorer::entry_density("i feel aware", &SELF_AWARENESS_KEYWORDS);
        assert_eq!(density, 100.0);
    }

    #[test]
    fn keywords_match_as_substrings_and_count_once() {
        // "thinking" contains "think"; repeated "feel" counts once
        let content = "i feel feel feel thinking about many different things today ok yes";
        let density = EmotionalIntelligenceScorer::entry_density(content, &SELF_AWARENESS_KEYWORDS);
        // 2 hits / 12 words * 1000 = 166.6 -> capped
        assert_eq!(density, 100.0);

        let sparse = format!("calm {}", "word ".repeat(99).trim_end());
        let density = EmotionalIntelligenceScorer::entry_density(&sparse, &REGULATION_KEYWORDS);
        assert!((density - 10.0).abs() < 1e-9);
    }

    #[test]
    fn content_is_lowercased_before_matching() {
        let scores = EmotionalIntelligenceScorer::score(&entries(&["I Feel CALM Right NOW"]));
        // 1 hit in 5 words = 200 -> 100, plus boost 5 -> 105 -> clamped 100
        assert_eq!(scores.self_awareness.value(), 100);
        assert_eq!(scores.emotional_regulation.value(), 100);
        assert_eq!(scores.mindfulness.value(), 100);
    }

    #[test]
    fn baseline_boost_caps_at_forty() {
        let many: Vec<&str> = vec!["nothing relevant"; 12];
        let scores = EmotionalIntelligenceScorer::score(&entries(&many));
        assert_eq!(scores.self_awareness.value(), 40);
    }

    #[test]
    fn aware_counts_for_self_awareness_and_mindfulness() {
        let content = format!("aware {}", "filler ".repeat(199).trim_end());
        let scores = EmotionalIntelligenceScorer::score(&entries(&[content.as_str()]));
        // 1/200*1000 = 5, plus 5 boost
        assert_eq!(scores.self_awareness.value(), 10);
        assert_eq!(scores.mindfulness.value(), 10);
        assert_eq!(scores.emotional_regulation.value(), 5);
    }

    proptest! {
        #[test]
        fn scores_stay_in_range(contents in proptest::collection::vec(".{0,80}", 0..20)) {
            let refs: Vec<&str> = contents.iter().map(|s| s.as_str()).collect();
            let scores = EmotionalIntelligenceScorer::score(&entries(&refs));
            prop_assert!(scores.self_awareness.value() <= 100);
            prop_assert!(scores.emotional_regulation.value() <= 100);
            prop_assert!(scores.mindfulness.value() <= 100);
        }
    }
}
