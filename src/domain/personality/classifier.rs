//! Personality Classifier - Likert responses to a four-letter type.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::dimension::{Dimension, StrengthTier};
use super::narrative::TypeNarrative;
use super::questionnaire::{find_item, Response};

/// Outcome for a single dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionResult {
    /// Signed sum of item contributions, -24..=24 for a complete submission.
    pub score: i32,
    pub preference: char,
    pub strength: StrengthTier,
}

impl DimensionResult {
    /// Resolves preference and strength for a raw dimension total.
    pub fn from_raw(dimension: Dimension, raw: i32) -> Self {
        Self {
            score: raw,
            preference: dimension.preference_for(raw),
            strength: StrengthTier::from_magnitude(raw.unsigned_abs()),
        }
    }
}

/// Per-dimension results keyed the way clients read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionBreakdown {
    #[serde(rename = "EI")]
    pub ei: DimensionResult,
    #[serde(rename = "SN")]
    pub sn: DimensionResult,
    #[serde(rename = "TF")]
    pub tf: DimensionResult,
    #[serde(rename = "JP")]
    pub jp: DimensionResult,
}

impl DimensionBreakdown {
    /// Returns the result for one dimension.
    pub fn get(&self, dimension: Dimension) -> &DimensionResult {
        match dimension {
            Dimension::EI => &self.ei,
            Dimension::SN => &self.sn,
            Dimension::TF => &self.tf,
            Dimension::JP => &self.jp,
        }
    }

    /// Type code built from the preferences in EI, SN, TF, JP order.
    pub fn type_code(&self) -> String {
        Dimension::ALL
            .iter()
            .map(|d| self.get(*d).preference)
            .collect()
    }
}

/// A computed personality classification with its narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    #[serde(rename = "type")]
    pub type_code: String,
    pub dimensions: DimensionBreakdown,
    #[serde(flatten)]
    pub narrative: TypeNarrative,
}

/// Scores questionnaire responses into a personality profile.
///
/// Classification is total: responses with unknown item ids are skipped and
/// completeness is not checked here. Pair with `validate_responses` when the
/// input comes from outside.
pub struct PersonalityClassifier;

impl PersonalityClassifier {
    /// Classifies a set of responses.
    pub fn classify(responses: &[Response]) -> PersonalityProfile {
        let totals = Self::dimension_totals(responses);
        let result = |d: Dimension| DimensionResult::from_raw(d, totals.get(&d).copied().unwrap_or(0));

        let dimensions = DimensionBreakdown {
            ei: result(Dimension::EI),
            sn: result(Dimension::SN),
            tf: result(Dimension::TF),
            jp: result(Dimension::JP),
        };
        let type_code = dimensions.type_code();
        let narrative = TypeNarrative::for_type(&type_code);

        PersonalityProfile {
            type_code,
            dimensions,
            narrative,
        }
    }

    /// Raw signed totals per dimension. Dimensions with no known items are absent.
    pub fn dimension_totals(responses: &[Response]) -> HashMap<Dimension, i32> {
        let mut totals = HashMap::new();
        for response in responses {
            let Some(item) = find_item(&response.question_id) else {
                continue;
            };
            *totals.entry(item.dimension).or_insert(0) += item.polarity.contribution(response.score);
        }
        totals
    }
}
