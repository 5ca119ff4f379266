//! Router assembly.
//!
//! Builds every application handler from the ports and mounts the feature
//! routers under their `/api` prefixes.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::assessment::{
    CreateAssessmentHandler, GetLatestMbtiHandler, ListAssessmentsHandler,
    SubmitMbtiAssessmentHandler,
};
use crate::application::handlers::insights::GetEmotionalInsightsHandler;
use crate::application::handlers::journal::{
    CreateJournalEntryHandler, ListJournalEntriesHandler, UpdateJournalEntryHandler,
};
use crate::application::handlers::progress::GetProgressReportHandler;
use crate::config::{AnalyticsConfig, ServerConfig, ValidationError};
use crate::domain::progress::ProgressAnalyzer;
use crate::ports::{AssessmentRepository, JournalEntryRepository, NarrativeGenerator};

use super::assessment::{assessment_routes, AssessmentHandlers};
use super::health::health_routes;
use super::insights::{insights_routes, InsightsHandlers};
use super::journal::{journal_routes, JournalHandlers};
use super::middleware::USER_ID_HEADER;
use super::progress::{progress_routes, ProgressHandlers};

/// Ports the HTTP surface is built on.
#[derive(Clone)]
pub struct AppDependencies {
    pub entries: Arc<dyn JournalEntryRepository>,
    pub assessments: Arc<dyn AssessmentRepository>,
    pub narrator: Arc<dyn NarrativeGenerator>,
}

/// Creates the API router without transport layers.
///
/// # Errors
///
/// Returns `ValidationError` if the analytics offset is out of range.
pub fn api_router(deps: AppDependencies, analytics: &AnalyticsConfig) -> Result<Router, ValidationError> {
    let analyzer = ProgressAnalyzer::new(analytics.utc_offset()?);

    let assessment_handlers = AssessmentHandlers::new(
        Arc::new(SubmitMbtiAssessmentHandler::new(deps.assessments.clone())),
        Arc::new(GetLatestMbtiHandler::new(deps.assessments.clone())),
        Arc::new(CreateAssessmentHandler::new(deps.assessments.clone())),
        Arc::new(ListAssessmentsHandler::new(deps.assessments.clone())),
    );

    let journal_handlers = JournalHandlers::new(
        Arc::new(CreateJournalEntryHandler::new(
            deps.entries.clone(),
            deps.assessments.clone(),
            deps.narrator.clone(),
            analytics.mentor_history_limit,
        )),
        Arc::new(ListJournalEntriesHandler::new(deps.entries.clone())),
        Arc::new(UpdateJournalEntryHandler::new(deps.entries.clone())),
    );

    let insights_handlers = InsightsHandlers::new(Arc::new(GetEmotionalInsightsHandler::new(
        deps.entries.clone(),
        deps.assessments.clone(),
        deps.narrator.clone(),
        analytics.insights_entry_limit,
        analytics.narrative_timeout(),
    )));

    let progress_handlers = ProgressHandlers::new(Arc::new(GetProgressReportHandler::new(
        deps.entries,
        deps.assessments,
        deps.narrator,
        analyzer,
        analytics.progress_entry_limit,
        analytics.narrative_timeout(),
    )));

    Ok(Router::new()
        .merge(health_routes())
        .nest("/api/assessments", assessment_routes(assessment_handlers))
        .nest("/api/journal", journal_routes(journal_handlers))
        .nest("/api/insights", insights_routes(insights_handlers))
        .nest("/api/progress", progress_routes(progress_handlers)))
}

/// Wraps a router with request tracing, a request timeout and CORS.
///
/// With no configured origins, CORS stays closed to cross-origin callers.
pub fn with_transport_layers(router: Router, server: &ServerConfig) -> Router {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)]);

    router
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
}
