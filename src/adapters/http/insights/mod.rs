//! HTTP adapter for emotional insight endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::EmotionalInsightsResponse;
pub use handlers::InsightsHandlers;
pub use routes::insights_routes;
