//! CreateAssessmentHandler - Command handler for storing any assessment type.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::assessment::{Assessment, AssessmentType, NewAssessment};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AssessmentRepository;

/// Command to store an assessment's raw results.
#[derive(Debug, Clone)]
pub struct CreateAssessmentCommand {
    pub user_id: UserId,
    pub assessment_type: AssessmentType,
    pub results: Value,
}

pub struct CreateAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl CreateAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateAssessmentCommand) -> Result<Assessment, DomainError> {
        let assessment = Assessment::create(NewAssessment::new(
            cmd.user_id,
            cmd.assessment_type,
            cmd.results,
        )?);
        self.repository.save(&assessment).await?;

        tracing::info!(
            user_id = %assessment.user_id(),
            assessment_type = %assessment.assessment_type(),
            "Assessment stored"
        );
        Ok(assessment)
    }
}
