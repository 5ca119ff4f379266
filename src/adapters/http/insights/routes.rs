//! HTTP routes for insight endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_emotional, InsightsHandlers};

/// Creates the insights router, mounted at `/api/insights`.
pub fn insights_routes(handlers: InsightsHandlers) -> Router {
    Router::new()
        .route("/emotional", get(get_emotional))
        .with_state(handlers)
}
