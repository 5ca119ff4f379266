//! Free-text progress narrative and its static substitutes.

use serde::{Deserialize, Serialize};

/// Where the narrative strings of a progress report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeSource {
    Generated,
    Fallback,
    EmptyHistory,
}

/// Patterns, growth areas, strengths and recommendations for a journal history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressNarrative {
    pub patterns: Vec<String>,
    pub growth_areas: Vec<String>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ProgressNarrative {
    /// Bundle for a user who has not written anything yet.
    pub fn empty_history() -> Self {
        Self {
            patterns: Vec::new(),
            growth_areas: vec![
                "Begin your emotional wellness journey by writing your first journal entry".into(),
            ],
            strengths: vec!["Taking the first step toward emotional awareness".into()],
            recommendations: vec![
                "Start with daily journaling for consistent emotional tracking".into(),
            ],
        }
    }

    /// Bundle used when narrative generation fails or times out.
    pub fn fallback() -> Self {
        Self {
            patterns: vec!["Regular emotional expression through journaling".into()],
            growth_areas: vec!["Continue building consistent emotional awareness".into()],
            strengths: vec!["Commitment to personal emotional growth".into()],
            recommendations: vec!["Maintain your journaling practice for continued insights".into()],
        }
    }
}

/// Patterns, growth areas and strengths seen across recent entries.
///
/// A lighter cousin of `ProgressNarrative` with no metrics and no recommendations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalInsights {
    pub patterns: Vec<String>,
    pub growth_areas: Vec<String>,
    pub strengths: Vec<String>,
}

impl EmotionalInsights {
    pub fn empty_history() -> Self {
        Self {
            patterns: Vec::new(),
            growth_areas: vec!["Continue regular journaling to identify patterns".into()],
            strengths: vec!["Taking the first step toward emotional awareness".into()],
        }
    }

    pub fn fallback() -> Self {
        Self {
            patterns: vec!["Regular journaling shows commitment to self-reflection".into()],
            growth_areas: vec!["Continue exploring emotions through writing".into()],
            strengths: vec!["Willingness to examine inner thoughts and feelings".into()],
        }
    }
}
