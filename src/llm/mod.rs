//! Model client boundary
//!
//! The pipeline consumes exactly one capability from the model side:
//! send a fully-rendered prompt, get raw text back. The trait keeps the
//! HTTP client swappable (and lets tests script replies).

pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

/// Failures of the model call itself. Surfaced as-is; no automatic
/// retry or backoff.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("API key not found: set the {env_var} environment variable")]
    MissingApiKey { env_var: String },

    #[error("request to model endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model endpoint returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("model returned an empty completion")]
    EmptyCompletion,
}

#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send a prompt to the text-generation service and return the raw
    /// text reply.
    async fn generate(&self, prompt: &str) -> Result<String, TransportError>;
}
