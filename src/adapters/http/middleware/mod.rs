//! HTTP middleware and extractors for axum.
//!
//! - `user` - Caller identity taken from the `X-User-Id` header

pub mod user;

pub use user::{AuthenticatedUser, AuthenticationRequired, USER_ID_HEADER};
