//! Prompt templates for the model calls.
//!
//! Wording is configuration, not logic: the embedded defaults can be
//! overridden per deployment by files in the configured templates
//! directory. Placeholders use `{{key}}` syntax and are filled by plain
//! substitution.

use crate::models::AnsweredQuestion;
use crate::{Context, Result};
use std::path::PathBuf;

// Embedded defaults, overridable via templates_dir
const ANALYZE_TEMPLATE: &str = include_str!("templates/analyze.md");
const CLARIFY_TEMPLATE: &str = include_str!("templates/clarify.md");
const IMPROVE_TEMPLATE: &str = include_str!("templates/improve.md");

/// Literal schema example injected into the analyze and improve prompts.
pub const REPORT_SCHEMA: &str = r#"{
  "summary": "string",
  "clarity_score": 0,
  "clarity_score_reason": "string",
  "ambiguities": ["string"],
  "missing_information": ["string"],
  "assumptions": ["string"],
  "risks_and_dependencies": ["string"],
  "edge_cases": ["string"],
  "acceptance_criteria": ["string"],
  "test_scenarios": ["string"]
}"#;

/// Literal schema example injected into the clarify prompt.
pub const CLARIFY_SCHEMA: &str = r#"{
  "clarifying_questions": [
    {"id": "Q1", "question": "string", "why_it_matters": "string"}
  ]
}"#;

/// Builds prompts from templates, checking the override directory first.
pub struct PromptBuilder {
    templates_dir: Option<PathBuf>,
}

impl PromptBuilder {
    pub fn new(templates_dir: Option<PathBuf>) -> Self {
        Self { templates_dir }
    }

    /// Load a template by filename, preferring a user override.
    fn template(&self, name: &str, embedded: &'static str) -> Result<String> {
        if let Some(dir) = &self.templates_dir {
            let path = dir.join(name);
            if path.exists() {
                return std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read prompt template {}", path.display()));
            }
        }
        Ok(embedded.to_string())
    }

    pub fn analyze_prompt(&self, requirement: &str) -> Result<String> {
        Ok(self
            .template("analyze.md", ANALYZE_TEMPLATE)?
            .replace("{{schema}}", REPORT_SCHEMA)
            .replace("{{requirement}}", requirement))
    }

    pub fn clarify_prompt(&self, requirement: &str) -> Result<String> {
        Ok(self
            .template("clarify.md", CLARIFY_TEMPLATE)?
            .replace("{{schema}}", CLARIFY_SCHEMA)
            .replace("{{requirement}}", requirement))
    }

    pub fn improve_prompt(
        &self,
        requirement: &str,
        answered: &[AnsweredQuestion],
    ) -> Result<String> {
        Ok(self
            .template("improve.md", IMPROVE_TEMPLATE)?
            .replace("{{schema}}", REPORT_SCHEMA)
            .replace("{{requirement}}", requirement)
            .replace("{{qa_text}}", &qa_transcript(answered)))
    }
}

/// Format the Q&A transcript for the improve prompt:
/// one `"<id>. <question>\nAnswer: <answer>"` block per question,
/// joined by blank lines.
pub fn qa_transcript(answered: &[AnsweredQuestion]) -> String {
    answered
        .iter()
        .map(|qa| {
            format!(
                "{}. {}\nAnswer: {}",
                qa.question.id,
                qa.question.question,
                qa.answer.trim()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClarifyingQuestion;
    use tempfile::TempDir;

    fn answered(id: &str, question: &str, answer: &str) -> AnsweredQuestion {
        AnsweredQuestion {
            question: ClarifyingQuestion {
                id: id.to_string(),
                question: question.to_string(),
                why_it_matters: "matters".to_string(),
            },
            answer: answer.to_string(),
        }
    }

    #[test]
    fn test_analyze_prompt_fills_placeholders() {
        let prompts = PromptBuilder::new(None);
        let prompt = prompts
            .analyze_prompt("Users can reset passwords with OTP.")
            .unwrap();

        assert!(prompt.contains("Users can reset passwords with OTP."));
        assert!(prompt.contains("\"clarity_score\": 0"));
        assert!(!prompt.contains("{{schema}}"));
        assert!(!prompt.contains("{{requirement}}"));
    }

    #[test]
    fn test_clarify_prompt_uses_clarify_schema() {
        let prompts = PromptBuilder::new(None);
        let prompt = prompts.clarify_prompt("req").unwrap();

        assert!(prompt.contains("clarifying_questions"));
        assert!(prompt.contains("why_it_matters"));
    }

    #[test]
    fn test_improve_prompt_includes_transcript() {
        let prompts = PromptBuilder::new(None);
        let qa = vec![
            answered("Q1", "Which channels?", "SMS only"),
            answered("Q2", "Expiry?", ""),
        ];
        let prompt = prompts.improve_prompt("req", &qa).unwrap();

        assert!(prompt.contains("Q1. Which channels?\nAnswer: SMS only"));
        assert!(prompt.contains("Q2. Expiry?\nAnswer: "));
        assert!(!prompt.contains("{{qa_text}}"));
    }

    #[test]
    fn test_qa_transcript_blocks_joined_by_blank_line() {
        let qa = vec![answered("Q1", "a?", "x"), answered("Q2", "b?", "y")];
        let text = qa_transcript(&qa);
        assert_eq!(text, "Q1. a?\nAnswer: x\n\nQ2. b?\nAnswer: y");
    }

    #[test]
    fn test_template_override_from_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("analyze.md"),
            "Custom: {{requirement}} / {{schema}}",
        )
        .unwrap();

        let prompts = PromptBuilder::new(Some(temp.path().to_path_buf()));
        let prompt = prompts.analyze_prompt("my req").unwrap();

        assert!(prompt.starts_with("Custom: my req / {"));
        // Other templates still fall back to the embedded default
        let clarify = prompts.clarify_prompt("my req").unwrap();
        assert!(clarify.contains("Ask clarifying questions"));
    }

    #[test]
    fn test_schema_literals_parse_as_json() {
        let report: serde_json::Value = serde_json::from_str(REPORT_SCHEMA).unwrap();
        assert!(report.get("test_scenarios").is_some());
        let clarify: serde_json::Value = serde_json::from_str(CLARIFY_SCHEMA).unwrap();
        assert!(clarify.get("clarifying_questions").is_some());
    }
}
