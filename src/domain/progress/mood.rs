//! Mood labels and their fixed wellness scores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Percentage, ValidationError};

/// Emotional tone of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Negative,
    Mixed,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Positive, Mood::Negative, Mood::Mixed, Mood::Neutral];

    /// Fixed wellness score used for averages and trends.
    pub fn score(&self) -> u32 {
        match self {
            Mood::Positive => 100,
            Mood::Mixed => 60,
            Mood::Neutral => 50,
            Mood::Negative => 20,
        }
    }

    /// Effective mood of a stored label. Missing or unrecognised labels count as neutral.
    pub fn from_label(label: Option<&str>) -> Self {
        label
            .and_then(|l| l.parse().ok())
            .unwrap_or(Mood::Neutral)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Positive => "positive",
            Mood::Negative => "negative",
            Mood::Mixed => "mixed",
            Mood::Neutral => "neutral",
        }
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    /// Exact, lowercase match on the four labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Mood::Positive),
            "negative" => Ok(Mood::Negative),
            "mixed" => Ok(Mood::Mixed),
            "neutral" => Ok(Mood::Neutral),
            other => Err(ValidationError::invalid_format(
                "mood",
                format!("'{}' is not one of positive, negative, mixed, neutral", other),
            )),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Share of entries per mood, each bucket rounded on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodDistribution {
    pub positive: Percentage,
    pub negative: Percentage,
    pub mixed: Percentage,
    pub neutral: Percentage,
}

impl MoodDistribution {
    pub fn get(&self, mood: Mood) -> Percentage {
        match mood {
            Mood::Positive => self.positive,
            Mood::Negative => self.negative,
            Mood::Mixed => self.mixed,
            Mood::Neutral => self.neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_match_fixed_mapping() {
        assert_eq!(Mood::Positive.score(), 100);
        assert_eq!(Mood::Mixed.score(), 60);
        assert_eq!(Mood::Neutral.score(), 50);
        assert_eq!(Mood::Negative.score(), 20);
    }

    #[test]
    fn unknown_or_missing_labels_are_neutral() {
        assert_eq!(Mood::from_label(None), Mood::Neutral);
        assert_eq!(Mood::from_label(Some("ecstatic")), Mood::Neutral);
        assert_eq!(Mood::from_label(Some("Positive")), Mood::Neutral);
        assert_eq!(Mood::from_label(Some("mixed")), Mood::Mixed);
    }

    #[test]
    fn strict_parse_rejects_unknown_labels() {
        assert_eq!("negative".parse::<Mood>(), Ok(Mood::Negative));
        let err = "sad".parse::<Mood>().unwrap_err();
        assert_eq!(err.field(), "mood");
    }

    #[test]
    fn mood_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mood::Mixed).unwrap(), "\"mixed\"");
        assert_eq!(Mood::Positive.to_string(), "positive");
    }
}
