//! HTTP DTOs for journal entry endpoints.
//!
//! Mood and mentor arrive as strings and are parsed strictly, so an unknown
//! label is a 400 rather than a silent default.

use serde::{Deserialize, Serialize};

use crate::application::handlers::journal::CreateJournalEntryResult;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::journal::JournalEntry;
use crate::domain::mentor::{MentorKind, MentorResponse};
use crate::domain::progress::Mood;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJournalEntryRequest {
    pub content: String,
    pub mood: Option<String>,
    pub selected_mentor: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJournalEntryRequest {
    pub content: Option<String>,
    pub mood: Option<String>,
    pub selected_mentor: Option<String>,
}

/// Query string for entry listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEntriesParams {
    pub limit: Option<i64>,
}

pub(super) fn parse_mood(mood: Option<&str>) -> Result<Option<Mood>, DomainError> {
    Ok(mood.map(str::parse::<Mood>).transpose()?)
}

pub(super) fn parse_mentor(mentor: Option<&str>) -> Result<Option<MentorKind>, DomainError> {
    Ok(mentor.map(str::parse::<MentorKind>).transpose()?)
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored journal entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryResponse {
    pub id: i64,
    pub user_id: String,
    pub content: String,
    pub mood: Option<String>,
    pub selected_mentor: Option<MentorKind>,
    pub sage_response: Option<String>,
    pub jax_response: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&JournalEntry> for JournalEntryResponse {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            id: entry.id().value(),
            user_id: entry.user_id().to_string(),
            content: entry.content().to_string(),
            mood: entry.mood().map(str::to_string),
            selected_mentor: entry.selected_mentor(),
            sage_response: entry.sage_response().map(str::to_string),
            jax_response: entry.jax_response().map(str::to_string),
            created_at: *entry.created_at(),
            updated_at: *entry.updated_at(),
        }
    }
}

/// A new entry together with the mentor's reply, if one was asked for.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJournalEntryResponse {
    #[serde(flatten)]
    pub entry: JournalEntryResponse,
    pub mentor_response: Option<MentorResponse>,
}

impl From<CreateJournalEntryResult> for CreateJournalEntryResponse {
    fn from(result: CreateJournalEntryResult) -> Self {
        Self {
            entry: JournalEntryResponse::from(&result.entry),
            mentor_response: result.mentor_response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EntryId, ErrorCode, UserId};
    use crate::domain::journal::NewJournalEntry;
    use serde_json::json;

    #[test]
    fn create_request_reads_camel_case() {
        let req: CreateJournalEntryRequest = serde_json::from_value(json!({
            "content": "Hello",
            "selectedMentor": "sage"
        }))
        .unwrap();
        assert_eq!(req.selected_mentor.as_deref(), Some("sage"));
        assert!(req.mood.is_none());
    }

    #[test]
    fn unknown_labels_are_validation_errors() {
        assert_eq!(parse_mood(Some("ecstatic")).unwrap_err().code, ErrorCode::ValidationFailed);
        assert_eq!(parse_mentor(Some("yoda")).unwrap_err().code, ErrorCode::ValidationFailed);
        assert_eq!(parse_mood(Some("mixed")).unwrap(), Some(Mood::Mixed));
        assert_eq!(parse_mentor(None).unwrap(), None);
    }

    #[test]
    fn create_response_flattens_entry() {
        let new = NewJournalEntry::new(
            UserId::new("user-1").unwrap(),
            "Hello",
            Some(Mood::Positive),
            Some(MentorKind::Sage),
        )
        .unwrap();
        let entry = JournalEntry::from_new(EntryId::new(3), new, Timestamp::now());
        let response = CreateJournalEntryResponse {
            entry: JournalEntryResponse::from(&entry),
            mentor_response: None,
        };
        let json = serde_json::to_value(response).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["mood"], "positive");
        assert_eq!(json["selectedMentor"], "sage");
        assert!(json["mentorResponse"].is_null());
        assert!(json["sageResponse"].is_null());
    }
}
