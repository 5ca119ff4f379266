//! AI Provider Adapters.
//!
//! - `OpenAIProvider` - OpenAI chat completions
//! - `MockAIProvider` - Scripted provider for tests and key-less local runs

mod mock_provider;
mod openai_provider;

pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
