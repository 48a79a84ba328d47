// Reqlens - Requirement-quality review assistant
// Sends a free-text requirement to an LLM and parses the reply into a
// fixed-schema quality report, with an optional clarify -> improve loop

pub mod cli;
pub mod extract;
pub mod llm;
pub mod models;
pub mod prompts;
pub mod services;
pub mod ui;
pub mod validator;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use models::{AnsweredQuestion, ClarifyingQuestion, QualityReport, ReqlensConfig};
pub use services::agent::AgentSession;
