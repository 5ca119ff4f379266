//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Language model providers (OpenAI, mock)
//! - `narrative` - `NarrativeGenerator` backed by an `AIProvider`
//! - `memory` - In-memory repositories
//! - `postgres` - PostgreSQL repositories and migrations
//! - `http` - axum routers, DTOs and the caller identity extractor

pub mod ai;
pub mod http;
pub mod memory;
pub mod narrative;
pub mod postgres;
