//! HTTP routes for assessment endpoints.

use axum::{routing::get, routing::post, Router};

use super::handlers::{
    create_assessment, get_latest_mbti, get_questions, list_assessments, submit_mbti,
    AssessmentHandlers,
};

/// Creates the assessment router, mounted at `/api/assessments`.
///
/// Routes:
/// - `GET /` - List assessments
/// - `POST /` - Store an assessment
/// - `GET /mbti/questions` - Questionnaire items
/// - `POST /mbti/submit` - Score a questionnaire
/// - `GET /mbti/latest` - Latest MBTI result
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", get(list_assessments).post(create_assessment))
        .route("/mbti/questions", get(get_questions))
        .route("/mbti/submit", post(submit_mbti))
        .route("/mbti/latest", get(get_latest_mbti))
        .with_state(handlers)
}
