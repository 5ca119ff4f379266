//! HTTP handlers for progress endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::AuthenticatedUser;
use crate::application::handlers::progress::{GetProgressReportHandler, GetProgressReportQuery};

use super::dto::ProgressReportResponse;

#[derive(Clone)]
pub struct ProgressHandlers {
    report_handler: Arc<GetProgressReportHandler>,
}

impl ProgressHandlers {
    pub fn new(report_handler: Arc<GetProgressReportHandler>) -> Self {
        Self { report_handler }
    }
}

/// GET /api/progress/comprehensive - Metrics, narrative and mood series
pub async fn get_comprehensive(
    State(handlers): State<ProgressHandlers>,
    user: AuthenticatedUser,
) -> Result<Response, ApiError> {
    let query = GetProgressReportQuery {
        user_id: user.user_id,
    };
    let report = handlers.report_handler.handle(query).await?;

    Ok(Json(ProgressReportResponse::from(report)).into_response())
}
