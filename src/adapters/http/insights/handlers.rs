//! HTTP handlers for insight endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::AuthenticatedUser;
use crate::application::handlers::insights::{
    GetEmotionalInsightsHandler, GetEmotionalInsightsQuery,
};

use super::dto::EmotionalInsightsResponse;

#[derive(Clone)]
pub struct InsightsHandlers {
    emotional_handler: Arc<GetEmotionalInsightsHandler>,
}

impl InsightsHandlers {
    pub fn new(emotional_handler: Arc<GetEmotionalInsightsHandler>) -> Self {
        Self { emotional_handler }
    }
}

/// GET /api/insights/emotional
pub async fn get_emotional(
    State(handlers): State<InsightsHandlers>,
    user: AuthenticatedUser,
) -> Result<Response, ApiError> {
    let query = GetEmotionalInsightsQuery {
        user_id: user.user_id,
    };
    let report = handlers.emotional_handler.handle(query).await?;

    Ok(Json(EmotionalInsightsResponse::from(report)).into_response())
}
