//! One-shot analysis pipeline: prompt -> model -> extract -> validate.

use crate::extract::extract_json;
use crate::llm::ModelClient;
use crate::models::QualityReport;
use crate::prompts::PromptBuilder;
use crate::validator::validate_report;
use crate::Result;

/// Run the full analyze pipeline for a requirement.
///
/// Any failure (transport, extraction, validation) is terminal for this
/// attempt; no partial report is produced.
pub async fn run_analysis(
    client: &dyn ModelClient,
    prompts: &PromptBuilder,
    requirement: &str,
) -> Result<QualityReport> {
    let prompt = prompts.analyze_prompt(requirement)?;
    let raw = client.generate(&prompt).await?;
    let value = extract_json(&raw)?;
    let report = validate_report(&value)?;
    Ok(report)
}
