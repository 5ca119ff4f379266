//! HTTP adapter for progress endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::ProgressReportResponse;
pub use handlers::ProgressHandlers;
pub use routes::progress_routes;
