//! Assessment repository port.

use async_trait::async_trait;

use crate::domain::assessment::{Assessment, AssessmentType};
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Save a new assessment.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// All assessments of a user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Assessment>, DomainError>;

    /// Most recent assessment of the given type, if any.
    async fn latest_by_type(
        &self,
        user_id: &UserId,
        assessment_type: AssessmentType,
    ) -> Result<Option<Assessment>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AssessmentRepository) {}
    }
}
