//! Strict completeness check for a questionnaire submission.

use std::collections::HashSet;
use thiserror::Error;

use super::questionnaire::{catalog, find_item, Response, CATALOG_SIZE, MAX_SCORE, MIN_SCORE};

/// Reasons a response set cannot be scored as a complete submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseSetError {
    #[error("Expected {expected} responses, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("Unknown question id '{0}'")]
    UnknownItem(String),

    #[error("Question '{0}' answered more than once")]
    DuplicateItem(String),

    #[error("Score for '{item}' must be between 1 and 7, got {score}")]
    ScoreOutOfRange { item: String, score: i32 },

    #[error("Missing answers for: {}", .0.join(", "))]
    MissingItems(Vec<String>),
}

/// Checks that `responses` answers every catalog item exactly once with a valid score.
///
/// Checks run in order: count, unknown ids, duplicates, score range, missing ids.
/// The first failing check is reported.
pub fn validate_responses(responses: &[Response]) -> Result<(), ResponseSetError> {
    if responses.len() != CATALOG_SIZE {
        return Err(ResponseSetError::WrongCount {
            expected: CATALOG_SIZE,
            actual: responses.len(),
        });
    }

    if let Some(unknown) = responses.iter().find(|r| find_item(&r.question_id).is_none()) {
        return Err(ResponseSetError::UnknownItem(unknown.question_id.clone()));
    }

    let mut seen = HashSet::with_capacity(CATALOG_SIZE);
    for response in responses {
        if !seen.insert(response.question_id.as_str()) {
            return Err(ResponseSetError::DuplicateItem(response.question_id.clone()));
        }
    }

    if let Some(bad) = responses
        .iter()
        .find(|r| !(MIN_SCORE..=MAX_SCORE).contains(&r.score))
    {
        return Err(ResponseSetError::ScoreOutOfRange {
            item: bad.question_id.clone(),
            score: bad.score,
        });
    }

    // Unreachable with 32 unique known ids, kept so the check stands alone.
    let missing: Vec<String> = catalog()
        .iter()
        .filter(|item| !seen.contains(item.id))
        .map(|item| item.id.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ResponseSetError::MissingItems(missing));
    }

    Ok(())
}
