//! HTTP routes for journal entry endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{create_entry, list_entries, update_entry, JournalHandlers};

/// Creates the journal router, mounted at `/api/journal`.
pub fn journal_routes(handlers: JournalHandlers) -> Router {
    Router::new()
        .route("/entries", get(list_entries).post(create_entry))
        .route("/entries/:id", put(update_entry))
        .with_state(handlers)
}
