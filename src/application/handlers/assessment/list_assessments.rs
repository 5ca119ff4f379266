//! ListAssessmentsHandler - Query handler for a user's assessment history.

use std::sync::Arc;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AssessmentRepository;

#[derive(Debug, Clone)]
pub struct ListAssessmentsQuery {
    pub user_id: UserId,
}

pub struct ListAssessmentsHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl ListAssessmentsHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    /// Assessments of every type, newest first.
    pub async fn handle(&self, query: ListAssessmentsQuery) -> Result<Vec<Assessment>, DomainError> {
        self.repository.list_by_user(&query.user_id).await
    }
}
