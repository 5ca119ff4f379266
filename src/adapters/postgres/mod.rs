//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresJournalEntryRepository` - `journal_entries` table
//! - `PostgresAssessmentRepository` - `assessments` table
//!
//! Schema lives in `migrations/` and is embedded at compile time.

mod assessment_repository;
mod journal_entry_repository;

pub use assessment_repository::PostgresAssessmentRepository;
pub use journal_entry_repository::PostgresJournalEntryRepository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens a connection pool and, when configured, applies pending migrations.
///
/// # Errors
///
/// - `DatabaseError` if the database is unreachable or a migration fails
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let mut options = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout());
    if let Some(idle) = config.idle_timeout() {
        options = options.idle_timeout(idle);
    }

    tracing::info!(url = %config.redacted_url(), "Connecting to database");
    let pool = options
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database("Failed to connect to database", e))?;

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| DomainError::database("Failed to run migrations", e))?;
        tracing::info!("Database migrations applied");
    }

    Ok(pool)
}
