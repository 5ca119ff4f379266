//! In-memory AssessmentRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::{Assessment, AssessmentType};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AssessmentRepository;

/// Assessments kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentRepository {
    assessments: Arc<RwLock<Vec<Assessment>>>,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.assessments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        self.assessments.write().await.push(assessment.clone());
        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Assessment>, DomainError> {
        let assessments = self.assessments.read().await;
        let mut owned: Vec<Assessment> = assessments
            .iter()
            .filter(|a| a.user_id() == user_id)
            .cloned()
            .collect();
        // Reversed first so equal timestamps keep the later insert first.
        owned.reverse();
        owned.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(owned)
    }

    async fn latest_by_type(
        &self,
        user_id: &UserId,
        assessment_type: AssessmentType,
    ) -> Result<Option<Assessment>, DomainError> {
        Ok(self
            .list_by_user(user_id)
            .await?
            .into_iter()
            .find(|a| a.assessment_type() == assessment_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::NewAssessment;
    use serde_json::json;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn assessment(user_id: &str, kind: AssessmentType, marker: i32) -> Assessment {
        Assessment::create(NewAssessment::new(user(user_id), kind, json!({ "marker": marker })).unwrap())
    }

    #[tokio::test]
    async fn list_is_newest_first_and_scoped() {
        let repo = InMemoryAssessmentRepository::new();
        repo.save(&assessment("a", AssessmentType::Disc, 1)).await.unwrap();
        repo.save(&assessment("a", AssessmentType::Big5, 2)).await.unwrap();
        repo.save(&assessment("b", AssessmentType::Disc, 3)).await.unwrap();

        let listed = repo.list_by_user(&user("a")).await.unwrap();
        let markers: Vec<i64> = listed
            .iter()
            .map(|a| a.results()["marker"].as_i64().unwrap())
            .collect();
        assert_eq!(markers, vec![2, 1]);
    }

    #[tokio::test]
    async fn latest_by_type_picks_most_recent_of_that_type() {
        let repo = InMemoryAssessmentRepository::new();
        repo.save(&assessment("a", AssessmentType::Mbti, 1)).await.unwrap();
        repo.save(&assessment("a", AssessmentType::Mbti, 2)).await.unwrap();
        repo.save(&assessment("a", AssessmentType::Disc, 3)).await.unwrap();

        let latest = repo
            .latest_by_type(&user("a"), AssessmentType::Mbti)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.results()["marker"], 2);
    }

    #[tokio::test]
    async fn latest_by_type_is_none_without_match() {
        let repo = InMemoryAssessmentRepository::new();
        repo.save(&assessment("a", AssessmentType::Disc, 1)).await.unwrap();

        let latest = repo
            .latest_by_type(&user("a"), AssessmentType::Mbti)
            .await
            .unwrap();
        assert!(latest.is_none());
    }
}
