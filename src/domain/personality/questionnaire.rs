//! Static questionnaire catalog and response type.
//!
//! The catalog is fixed at 32 items, eight per dimension. Odd-numbered items
//! point toward the first pole, even-numbered items toward the second.

use serde::{Deserialize, Serialize};

use super::dimension::{Dimension, Polarity};

/// Number of items in a complete questionnaire.
pub const CATALOG_SIZE: usize = 32;

/// Lowest valid Likert score.
pub const MIN_SCORE: i32 = 1;

/// Highest valid Likert score.
pub const MAX_SCORE: i32 = 7;

/// A single questionnaire prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionnaireItem {
    pub id: &'static str,
    pub text: &'static str,
    pub dimension: Dimension,
    #[serde(rename = "direction")]
    pub polarity: Polarity,
    pub category: &'static str,
}

const fn item(
    id: &'static str,
    text: &'static str,
    dimension: Dimension,
    polarity: Polarity,
    category: &'static str,
) -> QuestionnaireItem {
    QuestionnaireItem {
        id,
        text,
        dimension,
        polarity,
        category,
    }
}

use super::dimension::Dimension::{EI, JP, SN, TF};
use super::dimension::Polarity::{Negative, Positive};

static CATALOG: [QuestionnaireItem; CATALOG_SIZE] = [
    item("EI_1", "I feel energized after spending time with a large group of people", EI, Positive, "Energy Source"),
    item("EI_2", "I prefer to think things through before speaking in group discussions", EI, Negative, "Communication Style"),
    item("EI_3", "I tend to speak my thoughts out loud to help me process them", EI, Positive, "Processing Style"),
    item("EI_4", "I need quiet time alone to recharge after social activities", EI, Negative, "Energy Management"),
    item("EI_5", "I enjoy being the center of attention in social situations", EI, Positive, "Social Preference"),
    item("EI_6", "I prefer to work independently rather than in teams", EI, Negative, "Work Style"),
    item("EI_7", "I make friends easily and quickly", EI, Positive, "Social Connection"),
    item("EI_8", "I prefer to have a few close friends rather than many acquaintances", EI, Negative, "Relationship Depth"),
    item("SN_1", "I focus on specific facts and details when making decisions", SN, Positive, "Information Processing"),
    item("SN_2", "I'm more interested in future possibilities than current realities", SN, Negative, "Time Orientation"),
    item("SN_3", "I prefer practical, hands-on learning over theoretical concepts", SN, Positive, "Learning Style"),
    item("SN_4", "I often think about abstract ideas and theories", SN, Negative, "Thinking Patterns"),
    item("SN_5", "I trust information that comes from direct experience and observation", SN, Positive, "Information Trust"),
    item("SN_6", "I enjoy exploring new ideas and creative solutions", SN, Negative, "Innovation"),
    item("SN_7", "I prefer step-by-step instructions over figuring things out myself", SN, Positive, "Problem Solving"),
    item("SN_8", "I often see patterns and connections that others miss", SN, Negative, "Pattern Recognition"),
    item("TF_1", "I make decisions based on logical analysis rather than personal values", TF, Positive, "Decision Making"),
    item("TF_2", "I consider how decisions will affect people's feelings", TF, Negative, "Impact Consideration"),
    item("TF_3", "I value objective truth over maintaining harmony", TF, Positive, "Values Priority"),
    item("TF_4", "I find it important to understand others' emotional needs", TF, Negative, "Emotional Awareness"),
    item("TF_5", "I'm comfortable giving constructive criticism when necessary", TF, Positive, "Feedback Style"),
    item("TF_6", "I tend to take criticism personally even when it's constructive", TF, Negative, "Criticism Response"),
    item("TF_7", "I believe fairness is more important than mercy", TF, Positive, "Justice Orientation"),
    item("TF_8", "I'm naturally empathetic and can easily sense others' emotions", TF, Negative, "Empathy"),
    item("JP_1", "I prefer to have a clear schedule and stick to it", JP, Positive, "Structure Preference"),
    item("JP_2", "I like to keep my options open and be spontaneous", JP, Negative, "Flexibility"),
    item("JP_3", "I feel comfortable making decisions quickly", JP, Positive, "Decision Speed"),
    item("JP_4", "I prefer to gather more information before making decisions", JP, Negative, "Information Gathering"),
    item("JP_5", "I like to complete tasks well before deadlines", JP, Positive, "Time Management"),
    item("JP_6", "I work better under pressure and close to deadlines", JP, Negative, "Pressure Response"),
    item("JP_7", "I prefer organized and structured environments", JP, Positive, "Environment Preference"),
    item("JP_8", "I enjoy adapting to changing circumstances as they arise", JP, Negative, "Change Adaptation"),
];

/// Returns the full catalog in presentation order.
pub fn catalog() -> &'static [QuestionnaireItem] {
    &CATALOG
}

/// Looks up a catalog item by id.
pub fn find_item(id: &str) -> Option<&'static QuestionnaireItem> {
    CATALOG.iter().find(|item| item.id == id)
}

/// One answer to one questionnaire item, on the 1-7 agreement scale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: String,
    pub score: i32,
}

impl Response {
    pub fn new(question_id: impl Into<String>, score: i32) -> Self {
        Self {
            question_id: question_id.into(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_eight_items_per_dimension() {
        assert_eq!(catalog().len(), CATALOG_SIZE);
        for dimension in Dimension::ALL {
            let count = catalog().iter().filter(|i| i.dimension == dimension).count();
            assert_eq!(count, 8, "dimension {}", dimension);
        }
    }

    #[test]
    fn catalog_ids_are_unique_and_prefixed_by_dimension() {
        let ids: HashSet<_> = catalog().iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), CATALOG_SIZE);
        for item in catalog() {
            assert!(item.id.starts_with(item.dimension.code()));
        }
    }

    #[test]
    fn odd_items_are_positive_even_items_negative() {
        for item in catalog() {
            let n: u32 = item.id[3..].parse().unwrap();
            let expected = if n % 2 == 1 { Polarity::Positive } else { Polarity::Negative };
            assert_eq!(item.polarity, expected, "item {}", item.id);
        }
    }

    #[test]
    fn find_item_returns_none_for_unknown_id() {
        assert_eq!(find_item("TF_3").map(|i| i.category), Some("Values Priority"));
        assert!(find_item("XX_1").is_none());
    }

    #[test]
    fn item_serializes_polarity_as_direction() {
        let json = serde_json::to_value(find_item("EI_2").unwrap()).unwrap();
        assert_eq!(json["direction"], "negative");
        assert_eq!(json["dimension"], "EI");
    }

    #[test]
    fn response_uses_camel_case_on_the_wire() {
        let r: Response = serde_json::from_str(r#"{"questionId":"SN_4","score":6}"#).unwrap();
        assert_eq!(r, Response::new("SN_4", 6));
    }
}
