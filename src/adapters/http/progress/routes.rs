//! HTTP routes for progress endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_comprehensive, ProgressHandlers};

/// Creates the progress router, mounted at `/api/progress`.
pub fn progress_routes(handlers: ProgressHandlers) -> Router {
    Router::new()
        .route("/comprehensive", get(get_comprehensive))
        .with_state(handlers)
}
