//! LLM completion client module
//!
//! Provides the completion client capability trait, the wire message
//! types, and the provider factory.

use std::sync::Arc;

use eyre::{Result, bail};
use tracing::debug;

pub mod client;
mod error;
mod openai;
mod types;

pub use client::CompletionClient;
pub use error::LlmError;
pub use openai::OpenAiClient;
pub use types::{Message, Role};

use crate::config::LlmConfig;

/// Create a completion client for the provider named in config
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn CompletionClient>> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "openai" => Ok(Arc::new(OpenAiClient::from_config(config)?)),
        other => bail!("Unknown LLM provider: '{}'. Supported: openai", other),
    }
}
