//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own module with DTOs, axum handlers and routes.
//! `app` mounts them together.

pub mod app;
pub mod assessment;
pub mod error;
pub mod health;
pub mod insights;
pub mod journal;
pub mod middleware;
pub mod progress;

pub use app::{api_router, with_transport_layers, AppDependencies};
pub use error::{ApiError, ErrorResponse};
pub use middleware::AuthenticatedUser;
