//! Analyze command: one-shot quality review of a requirement.

use crate::llm::GeminiClient;
use crate::models::ReqlensConfig;
use crate::prompts::PromptBuilder;
use crate::services::{analysis, report_file};
use crate::ui;
use crate::Result;
use colored::Colorize;
use std::path::Path;

pub async fn run(file: Option<&Path>) -> Result<()> {
    let config = ReqlensConfig::load(&std::env::current_dir()?)?;
    let requirement = super::read_requirement(file)?;

    let client = GeminiClient::from_config(&config)?;
    let prompts = PromptBuilder::new(config.templates_dir.clone());

    let spinner = ui::spinner("Analyzing requirement...");
    let result = analysis::run_analysis(&client, &prompts, &requirement).await;
    spinner.finish_and_clear();
    let report = result?;

    ui::render_report(&report);
    report_file::save_report(&report, &config.report_path)?;
    println!(
        "{}",
        format!("✓ Report saved to {}", config.report_path.display()).green()
    );

    Ok(())
}
