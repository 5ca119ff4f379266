//! GetLatestMbtiHandler - Query handler for a user's most recent MBTI result.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentType};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::AssessmentRepository;

/// Query for the latest MBTI assessment.
#[derive(Debug, Clone)]
pub struct GetLatestMbtiQuery {
    pub user_id: UserId,
}

pub struct GetLatestMbtiHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetLatestMbtiHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `AssessmentNotFound` if the user has never submitted the questionnaire
    pub async fn handle(&self, query: GetLatestMbtiQuery) -> Result<Assessment, DomainError> {
        self.repository
            .latest_by_type(&query.user_id, AssessmentType::Mbti)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::AssessmentNotFound, "No MBTI assessment found")
            })
    }
}

/// Type code of the user's latest MBTI assessment, if any.
pub async fn latest_mbti_type(
    repository: &dyn AssessmentRepository,
    user_id: &UserId,
) -> Result<Option<String>, DomainError> {
    Ok(repository
        .latest_by_type(user_id, AssessmentType::Mbti)
        .await?
        .and_then(|a| a.mbti_type().map(str::to_string)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAssessmentRepository;
    use crate::domain::assessment::NewAssessment;
    use serde_json::json;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[tokio::test]
    async fn missing_assessment_is_not_found() {
        let handler = GetLatestMbtiHandler::new(Arc::new(InMemoryAssessmentRepository::new()));
        let err = handler
            .handle(GetLatestMbtiQuery { user_id: user() })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AssessmentNotFound);
    }

    #[tokio::test]
    async fn other_types_do_not_count() {
        let repo = InMemoryAssessmentRepository::new();
        let big5 = Assessment::create(
            NewAssessment::new(user(), AssessmentType::Big5, json!({"type": "INTJ"})).unwrap(),
        );
        repo.save(&big5).await.unwrap();

        assert_eq!(latest_mbti_type(&repo, &user()).await.unwrap(), None);

        let mbti = Assessment::create(
            NewAssessment::new(user(), AssessmentType::Mbti, json!({"type": "INFP"})).unwrap(),
        );
        repo.save(&mbti).await.unwrap();

        assert_eq!(
            latest_mbti_type(&repo, &user()).await.unwrap().as_deref(),
            Some("INFP")
        );
    }
}
