//! PostgreSQL implementation of AssessmentRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::assessment::{Assessment, AssessmentType};
use crate::domain::foundation::{AssessmentId, DomainError, Timestamp, UserId};
use crate::ports::AssessmentRepository;

#[derive(Clone)]
pub struct PostgresAssessmentRepository {
    pool: PgPool,
}

impl PostgresAssessmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentRepository for PostgresAssessmentRepository {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO assessments (id, user_id, assessment_type, results, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(assessment.id().as_uuid())
        .bind(assessment.user_id().as_str())
        .bind(assessment.assessment_type().as_str())
        .bind(assessment.results())
        .bind(assessment.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert assessment", e))?;

        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Assessment>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, assessment_type, results, created_at
            FROM assessments
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list assessments", e))?;

        rows.iter().map(row_to_assessment).collect()
    }

    async fn latest_by_type(
        &self,
        user_id: &UserId,
        assessment_type: AssessmentType,
    ) -> Result<Option<Assessment>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, assessment_type, results, created_at
            FROM assessments
            WHERE user_id = $1 AND assessment_type = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .bind(assessment_type.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch latest assessment", e))?;

        row.as_ref().map(row_to_assessment).transpose()
    }
}

fn row_to_assessment(row: &sqlx::postgres::PgRow) -> Result<Assessment, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| DomainError::database("Failed to get user_id", e))?;
    let assessment_type: String = row
        .try_get("assessment_type")
        .map_err(|e| DomainError::database("Failed to get assessment_type", e))?;
    let results: serde_json::Value = row
        .try_get("results")
        .map_err(|e| DomainError::database("Failed to get results", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database("Failed to get created_at", e))?;

    Ok(Assessment::reconstitute(
        AssessmentId::from_uuid(id),
        UserId::new(user_id).map_err(|e| DomainError::database("Invalid user_id", e))?,
        assessment_type
            .parse()
            .map_err(|e| DomainError::database("Invalid assessment_type", e))?,
        results,
        Timestamp::from_datetime(created_at),
    ))
}
