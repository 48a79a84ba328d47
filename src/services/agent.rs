//! Agent-mode pipeline: clarify -> answer -> improve.
//!
//! All state lives in an explicit `AgentSession` value threaded through
//! the steps; nothing is held in ambient storage between calls.

use crate::extract::extract_json;
use crate::llm::ModelClient;
use crate::models::{AnsweredQuestion, ClarifyingQuestion, ClarifyingQuestions, QualityReport};
use crate::prompts::PromptBuilder;
use crate::validator::validate_report;
use crate::{Context, Result};

/// State for one clarify -> answer -> improve round.
#[derive(Debug, Default)]
pub struct AgentSession {
    pub original_requirement: String,
    pub questions: Vec<ClarifyingQuestion>,
    pub answers: Vec<AnsweredQuestion>,
    pub latest_report: Option<QualityReport>,
}

impl AgentSession {
    pub fn new(requirement: impl Into<String>) -> Self {
        Self {
            original_requirement: requirement.into(),
            ..Self::default()
        }
    }

    /// Ask the model for clarifying questions and store them on the
    /// session.
    pub async fn clarify(
        &mut self,
        client: &dyn ModelClient,
        prompts: &PromptBuilder,
    ) -> Result<()> {
        let prompt = prompts.clarify_prompt(&self.original_requirement)?;
        let raw = client.generate(&prompt).await?;
        let value = extract_json(&raw)?;
        let parsed: ClarifyingQuestions = serde_json::from_value(value)
            .context("clarify reply did not match the clarifying_questions schema")?;

        self.questions = parsed.clarifying_questions;
        Ok(())
    }

    /// Pair collected answers with the stored questions, in order.
    /// Empty strings are kept as "unanswered".
    pub fn record_answers(&mut self, answers: Vec<String>) {
        self.answers = self
            .questions
            .iter()
            .cloned()
            .zip(answers)
            .map(|(question, answer)| AnsweredQuestion { question, answer })
            .collect();
    }

    /// Re-run the analysis incorporating the recorded answers.
    pub async fn improve(
        &mut self,
        client: &dyn ModelClient,
        prompts: &PromptBuilder,
    ) -> Result<QualityReport> {
        let prompt = prompts.improve_prompt(&self.original_requirement, &self.answers)?;
        let raw = client.generate(&prompt).await?;
        let value = extract_json(&raw)?;
        let report = validate_report(&value)?;

        self.latest_report = Some(report.clone());
        Ok(report)
    }
}
