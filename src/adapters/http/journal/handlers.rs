//! HTTP handlers for journal entry endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::adapters::http::middleware::AuthenticatedUser;
use crate::application::handlers::journal::{
    CreateJournalEntryCommand, CreateJournalEntryHandler, ListJournalEntriesHandler,
    ListJournalEntriesQuery, UpdateJournalEntryCommand, UpdateJournalEntryHandler,
};
use crate::domain::foundation::{DomainError, EntryId};
use crate::domain::journal::ListLimit;

use super::dto::{
    parse_mentor, parse_mood, CreateJournalEntryRequest, CreateJournalEntryResponse,
    JournalEntryResponse, ListEntriesParams, UpdateJournalEntryRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct JournalHandlers {
    create_handler: Arc<CreateJournalEntryHandler>,
    list_handler: Arc<ListJournalEntriesHandler>,
    update_handler: Arc<UpdateJournalEntryHandler>,
}

impl JournalHandlers {
    pub fn new(
        create_handler: Arc<CreateJournalEntryHandler>,
        list_handler: Arc<ListJournalEntriesHandler>,
        update_handler: Arc<UpdateJournalEntryHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            update_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/journal/entries?limit= - Most recent entries first
pub async fn list_entries(
    State(handlers): State<JournalHandlers>,
    user: AuthenticatedUser,
    params: Result<Query<ListEntriesParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let limit = ListLimit::new(params.limit).map_err(DomainError::from)?;
    let query = ListJournalEntriesQuery {
        user_id: user.user_id,
        limit,
    };
    let entries = handlers.list_handler.handle(query).await?;
    let body: Vec<JournalEntryResponse> = entries.iter().map(JournalEntryResponse::from).collect();

    Ok(Json(body).into_response())
}

/// POST /api/journal/entries - Write an entry, optionally asking a mentor
pub async fn create_entry(
    State(handlers): State<JournalHandlers>,
    user: AuthenticatedUser,
    payload: Result<Json<CreateJournalEntryRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let cmd = CreateJournalEntryCommand {
        user_id: user.user_id,
        content: req.content,
        mood: parse_mood(req.mood.as_deref())?,
        selected_mentor: parse_mentor(req.selected_mentor.as_deref())?,
    };
    let result = handlers.create_handler.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(CreateJournalEntryResponse::from(result))).into_response())
}

/// PUT /api/journal/entries/:id - Edit content, mood or mentor
pub async fn update_entry(
    State(handlers): State<JournalHandlers>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    payload: Result<Json<UpdateJournalEntryRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let entry_id: EntryId = match id.parse() {
        Ok(id) => id,
        Err(_) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid entry ID")),
            )
                .into_response())
        }
    };

    let Json(req) = payload?;

    let cmd = UpdateJournalEntryCommand {
        user_id: user.user_id,
        entry_id,
        content: req.content,
        mood: parse_mood(req.mood.as_deref())?,
        selected_mentor: parse_mentor(req.selected_mentor.as_deref())?,
    };
    let entry = handlers.update_handler.handle(cmd).await?;

    Ok(Json(JournalEntryResponse::from(&entry)).into_response())
}
