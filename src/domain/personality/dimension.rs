//! Personality dimensions, item polarity and strength tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary personality axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    /// Extraversion / Introversion
    EI,
    /// Sensing / Intuition
    SN,
    /// Thinking / Feeling
    TF,
    /// Judging / Perceiving
    JP,
}

impl Dimension {
    /// All dimensions in type-code order.
    pub const ALL: [Dimension; 4] = [Dimension::EI, Dimension::SN, Dimension::TF, Dimension::JP];

    /// Letter chosen when the raw score is zero or positive.
    pub fn first_pole(&self) -> char {
        match self {
            Dimension::EI => 'E',
            Dimension::SN => 'S',
            Dimension::TF => 'T',
            Dimension::JP => 'J',
        }
    }

    /// Letter chosen when the raw score is negative.
    pub fn second_pole(&self) -> char {
        match self {
            Dimension::EI => 'I',
            Dimension::SN => 'N',
            Dimension::TF => 'F',
            Dimension::JP => 'P',
        }
    }

    /// Resolves the preference letter for a raw score. Ties go to the first pole.
    pub fn preference_for(&self, raw: i32) -> char {
        if raw >= 0 {
            self.first_pole()
        } else {
            self.second_pole()
        }
    }

    /// Returns the two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Dimension::EI => "EI",
            Dimension::SN => "SN",
            Dimension::TF => "TF",
            Dimension::JP => "JP",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Whether agreeing with an item pushes toward the first pole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Signed contribution of a Likert score to its dimension total.
    ///
    /// The scale midpoint (4) contributes nothing.
    pub fn contribution(&self, score: i32) -> i32 {
        let centered = score - 4;
        match self {
            Polarity::Positive => centered,
            Polarity::Negative => -centered,
        }
    }
}

/// How decisively a dimension leans toward its preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Strong,
    Moderate,
    Slight,
}

impl StrengthTier {
    /// Minimum magnitude for a strong preference.
    pub const STRONG_THRESHOLD: u32 = 8;

    /// Minimum magnitude for a moderate preference.
    pub const MODERATE_THRESHOLD: u32 = 4;

    /// Derives the tier from the absolute raw score.
    pub fn from_magnitude(magnitude: u32) -> Self {
        if magnitude >= Self::STRONG_THRESHOLD {
            StrengthTier::Strong
        } else if magnitude >= Self::MODERATE_THRESHOLD {
            StrengthTier::Moderate
        } else {
            StrengthTier::Slight
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_ties_resolve_to_first_pole() {
        assert_eq!(Dimension::EI.preference_for(0), 'E');
        assert_eq!(Dimension::SN.preference_for(-1), 'N');
        assert_eq!(Dimension::TF.preference_for(5), 'T');
        assert_eq!(Dimension::JP.preference_for(-24), 'P');
    }

    #[test]
    fn negative_polarity_flips_contribution() {
        assert_eq!(Polarity::Positive.contribution(7), 3);
        assert_eq!(Polarity::Negative.contribution(7), -3);
        assert_eq!(Polarity::Negative.contribution(1), 3);
        assert_eq!(Polarity::Positive.contribution(4), 0);
    }

    #[test]
    fn strength_tier_boundaries() {
        assert_eq!(StrengthTier::from_magnitude(0), StrengthTier::Slight);
        assert_eq!(StrengthTier::from_magnitude(3), StrengthTier::Slight);
        assert_eq!(StrengthTier::from_magnitude(4), StrengthTier::Moderate);
        assert_eq!(StrengthTier::from_magnitude(7), StrengthTier::Moderate);
        assert_eq!(StrengthTier::from_magnitude(8), StrengthTier::Strong);
        assert_eq!(StrengthTier::from_magnitude(24), StrengthTier::Strong);
    }

    #[test]
    fn enums_serialize_to_wire_names() {
        assert_eq!(serde_json::to_string(&Dimension::TF).unwrap(), "\"TF\"");
        assert_eq!(serde_json::to_string(&Polarity::Negative).unwrap(), "\"negative\"");
        assert_eq!(serde_json::to_string(&StrengthTier::Moderate).unwrap(), "\"moderate\"");
    }
}
