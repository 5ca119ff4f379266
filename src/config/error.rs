//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool max_connections must be at least 1 and not below min_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (50)")]
    PoolSizeTooLarge,

    #[error("Database acquire timeout must be between 1 and 60 seconds")]
    InvalidAcquireTimeout,

    #[error("Invalid OpenAI API key format")]
    InvalidOpenAiKey,

    #[error("AI base URL must start with http:// or https://")]
    InvalidAiBaseUrl,

    #[error("Invalid AI request timeout")]
    InvalidAiTimeout,

    #[error("Narrative timeout must be between 1 and 120 seconds")]
    InvalidNarrativeTimeout,

    #[error("UTC offset must be within +/-14 hours")]
    InvalidUtcOffset,

    #[error("{0} must be at least 1")]
    InvalidLimit(&'static str),
}
