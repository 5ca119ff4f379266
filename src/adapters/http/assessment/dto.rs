//! HTTP DTOs for assessment endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::handlers::assessment::SubmitMbtiAssessmentResult;
use crate::domain::assessment::Assessment;
use crate::domain::foundation::Timestamp;
use crate::domain::personality::{JournalingInsights, PersonalityProfile, Response};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Questionnaire answers.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitMbtiRequest {
    pub responses: Vec<Response>,
}

/// Raw results of any assessment type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentRequest {
    pub assessment_type: String,
    pub results: Value,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub id: String,
    pub user_id: String,
    pub assessment_type: String,
    pub results: Value,
    pub created_at: Timestamp,
}

impl From<&Assessment> for AssessmentResponse {
    fn from(assessment: &Assessment) -> Self {
        Self {
            id: assessment.id().to_string(),
            user_id: assessment.user_id().to_string(),
            assessment_type: assessment.assessment_type().to_string(),
            results: assessment.results().clone(),
            created_at: *assessment.created_at(),
        }
    }
}

/// Response for a scored questionnaire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MbtiSubmissionResponse {
    pub assessment: AssessmentResponse,
    pub results: PersonalityProfile,
    pub journaling_insights: JournalingInsights,
}

impl From<SubmitMbtiAssessmentResult> for MbtiSubmissionResponse {
    fn from(result: SubmitMbtiAssessmentResult) -> Self {
        Self {
            assessment: AssessmentResponse::from(&result.assessment),
            results: result.profile,
            journaling_insights: result.journaling_insights,
        }
    }
}
