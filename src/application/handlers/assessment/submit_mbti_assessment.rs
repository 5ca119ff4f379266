//! SubmitMbtiAssessmentHandler - Command handler for scoring a questionnaire.

use std::sync::Arc;

use crate::domain::assessment::{
    Assessment, AssessmentType, MbtiAssessmentResults, NewAssessment,
};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::personality::{
    validate_responses, JournalingInsights, PersonalityClassifier, PersonalityProfile, Response,
};
use crate::ports::AssessmentRepository;

/// Command to score and store a complete questionnaire.
#[derive(Debug, Clone)]
pub struct SubmitMbtiAssessmentCommand {
    pub user_id: UserId,
    pub responses: Vec<Response>,
}

/// Result of a stored MBTI assessment.
#[derive(Debug, Clone)]
pub struct SubmitMbtiAssessmentResult {
    pub assessment: Assessment,
    pub profile: PersonalityProfile,
    pub journaling_insights: JournalingInsights,
}

/// Handler for MBTI submissions.
pub struct SubmitMbtiAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl SubmitMbtiAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the responses are not one valid answer per item
    /// - `DatabaseError` if the assessment cannot be stored
    pub async fn handle(
        &self,
        cmd: SubmitMbtiAssessmentCommand,
    ) -> Result<SubmitMbtiAssessmentResult, DomainError> {
        validate_responses(&cmd.responses)
            .map_err(|e| DomainError::validation("responses", e.to_string()))?;

        let profile = PersonalityClassifier::classify(&cmd.responses);
        let journaling_insights = JournalingInsights::for_type(&profile.type_code);

        let results = MbtiAssessmentResults {
            profile: profile.clone(),
            journaling_insights: journaling_insights.clone(),
            responses: cmd.responses,
        }
        .to_json()?;

        let assessment = Assessment::create(NewAssessment::new(
            cmd.user_id,
            AssessmentType::Mbti,
            results,
        )?);
        self.repository.save(&assessment).await?;

        tracing::info!(
            user_id = %assessment.user_id(),
            assessment_id = %assessment.id(),
            mbti_type = %profile.type_code,
            "MBTI assessment stored"
        );

        Ok(SubmitMbtiAssessmentResult {
            assessment,
            profile,
            journaling_insights,
        })
    }
}
