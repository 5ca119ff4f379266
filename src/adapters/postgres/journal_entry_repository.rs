//! PostgreSQL implementation of JournalEntryRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, EntryId, ErrorCode, Timestamp, UserId};
use crate::domain::journal::{JournalEntry, NewJournalEntry};
use crate::domain::mentor::MentorKind;
use crate::ports::JournalEntryRepository;

const ENTRY_COLUMNS: &str = "id, user_id, content, mood, selected_mentor, sage_response, \
                             jax_response, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresJournalEntryRepository {
    pool: PgPool,
}

impl PostgresJournalEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JournalEntryRepository for PostgresJournalEntryRepository {
    async fn create(&self, entry: &NewJournalEntry) -> Result<JournalEntry, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO journal_entries (user_id, content, mood, selected_mentor)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            ENTRY_COLUMNS
        ))
        .bind(entry.user_id.as_str())
        .bind(&entry.content)
        .bind(entry.mood.map(|m| m.as_str()))
        .bind(entry.selected_mentor.map(|m| m.as_str()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert journal entry", e))?;

        row_to_entry(&row)
    }

    async fn update(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE journal_entries SET
                content = $2,
                mood = $3,
                selected_mentor = $4,
                sage_response = $5,
                jax_response = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(entry.id().value())
        .bind(entry.content())
        .bind(entry.mood())
        .bind(entry.selected_mentor().map(|m| m.as_str()))
        .bind(entry.sage_response())
        .bind(entry.jax_response())
        .bind(entry.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update journal entry", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::EntryNotFound,
                format!("Journal entry not found: {}", entry.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: EntryId) -> Result<Option<JournalEntry>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM journal_entries WHERE id = $1",
            ENTRY_COLUMNS
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch journal entry", e))?;

        row.as_ref().map(row_to_entry).transpose()
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<JournalEntry>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM journal_entries
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
            ENTRY_COLUMNS
        ))
        .bind(user_id.as_str())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list journal entries", e))?;

        rows.iter().map(row_to_entry).collect()
    }
}

fn column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

fn row_to_entry(row: &sqlx::postgres::PgRow) -> Result<JournalEntry, DomainError> {
    let id: i64 = column(row, "id")?;
    let user_id: String = column(row, "user_id")?;
    let selected_mentor: Option<String> = column(row, "selected_mentor")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(row, "updated_at")?;

    let user_id = UserId::new(user_id).map_err(|e| DomainError::database("Invalid user_id", e))?;
    let selected_mentor = selected_mentor
        .map(|m| m.parse::<MentorKind>())
        .transpose()
        .map_err(|e| DomainError::database("Invalid selected_mentor", e))?;

    Ok(JournalEntry::reconstitute(
        EntryId::new(id),
        user_id,
        column(row, "content")?,
        column(row, "mood")?,
        selected_mentor,
        column(row, "sage_response")?,
        column(row, "jax_response")?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
