//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::AuthenticatedUser;
use crate::application::handlers::assessment::{
    CreateAssessmentCommand, CreateAssessmentHandler, GetLatestMbtiHandler, GetLatestMbtiQuery,
    GetQuestionnaireHandler, ListAssessmentsHandler, ListAssessmentsQuery,
    SubmitMbtiAssessmentCommand, SubmitMbtiAssessmentHandler,
};
use crate::domain::assessment::AssessmentType;
use crate::domain::foundation::DomainError;

use super::dto::{
    AssessmentResponse, CreateAssessmentRequest, MbtiSubmissionResponse, SubmitMbtiRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    questionnaire_handler: GetQuestionnaireHandler,
    submit_mbti_handler: Arc<SubmitMbtiAssessmentHandler>,
    latest_mbti_handler: Arc<GetLatestMbtiHandler>,
    create_handler: Arc<CreateAssessmentHandler>,
    list_handler: Arc<ListAssessmentsHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        submit_mbti_handler: Arc<SubmitMbtiAssessmentHandler>,
        latest_mbti_handler: Arc<GetLatestMbtiHandler>,
        create_handler: Arc<CreateAssessmentHandler>,
        list_handler: Arc<ListAssessmentsHandler>,
    ) -> Self {
        Self {
            questionnaire_handler: GetQuestionnaireHandler::new(),
            submit_mbti_handler,
            latest_mbti_handler,
            create_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/assessments/mbti/questions - The 32 questionnaire items
pub async fn get_questions(
    State(handlers): State<AssessmentHandlers>,
    _user: AuthenticatedUser,
) -> Response {
    Json(handlers.questionnaire_handler.handle()).into_response()
}

/// POST /api/assessments/mbti/submit - Score and store a questionnaire
pub async fn submit_mbti(
    State(handlers): State<AssessmentHandlers>,
    user: AuthenticatedUser,
    payload: Result<Json<SubmitMbtiRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let cmd = SubmitMbtiAssessmentCommand {
        user_id: user.user_id,
        responses: req.responses,
    };
    let result = handlers.submit_mbti_handler.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(MbtiSubmissionResponse::from(result))).into_response())
}

/// GET /api/assessments/mbti/latest - Most recent MBTI assessment
pub async fn get_latest_mbti(
    State(handlers): State<AssessmentHandlers>,
    user: AuthenticatedUser,
) -> Result<Response, ApiError> {
    let query = GetLatestMbtiQuery {
        user_id: user.user_id,
    };
    let assessment = handlers.latest_mbti_handler.handle(query).await?;

    Ok(Json(AssessmentResponse::from(&assessment)).into_response())
}

/// GET /api/assessments - All of the user's assessments, newest first
pub async fn list_assessments(
    State(handlers): State<AssessmentHandlers>,
    user: AuthenticatedUser,
) -> Result<Response, ApiError> {
    let query = ListAssessmentsQuery {
        user_id: user.user_id,
    };
    let assessments = handlers.list_handler.handle(query).await?;
    let body: Vec<AssessmentResponse> = assessments.iter().map(AssessmentResponse::from).collect();

    Ok(Json(body).into_response())
}

/// POST /api/assessments - Store raw assessment results
pub async fn create_assessment(
    State(handlers): State<AssessmentHandlers>,
    user: AuthenticatedUser,
    payload: Result<Json<CreateAssessmentRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let assessment_type: AssessmentType =
        req.assessment_type.parse().map_err(DomainError::from)?;
    let cmd = CreateAssessmentCommand {
        user_id: user.user_id,
        assessment_type,
        results: req.results,
    };
    let assessment = handlers.create_handler.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(AssessmentResponse::from(&assessment))).into_response())
}
