//! Journal Mentor server.

use std::sync::Arc;

use secrecy::ExposeSecret;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use journal_mentor::adapters::ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
use journal_mentor::adapters::http::{api_router, with_transport_layers, AppDependencies};
use journal_mentor::adapters::memory::{InMemoryAssessmentRepository, InMemoryJournalEntryRepository};
use journal_mentor::adapters::narrative::LlmNarrativeGenerator;
use journal_mentor::adapters::postgres::{
    self, PostgresAssessmentRepository, PostgresJournalEntryRepository,
};
use journal_mentor::config::{AiConfig, AppConfig};
use journal_mentor::ports::{AIProvider, AssessmentRepository, JournalEntryRepository};

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");
    init_tracing(&config);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    }

    let provider = ai_provider(&config.ai);
    let narrator = Arc::new(LlmNarrativeGenerator::new(provider));

    let (entries, assessments): (Arc<dyn JournalEntryRepository>, Arc<dyn AssessmentRepository>) =
        match &config.database {
            Some(database) => {
                let pool = postgres::connect(database)
                    .await
                    .expect("Failed to connect to database");
                tracing::info!("Using PostgreSQL storage");
                (
                    Arc::new(PostgresJournalEntryRepository::new(pool.clone())),
                    Arc::new(PostgresAssessmentRepository::new(pool)),
                )
            }
            None => {
                tracing::warn!("No database configured, entries are kept in memory");
                (
                    Arc::new(InMemoryJournalEntryRepository::new()),
                    Arc::new(InMemoryAssessmentRepository::new()),
                )
            }
        };

    let deps = AppDependencies {
        entries,
        assessments,
        narrator,
    };
    let router = api_router(deps, &config.analytics).expect("Invalid analytics configuration");
    let app = with_transport_layers(router, &config.server);

    let addr = config.server.socket_addr().expect("Invalid server address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!(%addr, environment = ?config.server.environment, "Journal Mentor listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}

fn ai_provider(config: &AiConfig) -> Arc<dyn AIProvider> {
    let Some(key) = config.openai_api_key.as_ref().filter(|_| config.has_openai()) else {
        tracing::warn!("No OpenAI API key configured, using the mock provider");
        return Arc::new(MockAIProvider::new());
    };

    let openai_config = OpenAIConfig::new(key.expose_secret().clone())
        .with_model(config.model.clone())
        .with_base_url(config.base_url.clone())
        .with_timeout(config.timeout())
        .with_max_retries(config.max_retries);

    match OpenAIProvider::new(openai_config) {
        Ok(provider) => {
            tracing::info!(model = %config.model, "Using OpenAI provider");
            Arc::new(provider)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to build OpenAI client, using the mock provider");
            Arc::new(MockAIProvider::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
