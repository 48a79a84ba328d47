//! Agent command: clarify -> answer -> improve loop.

use crate::llm::GeminiClient;
use crate::models::ReqlensConfig;
use crate::prompts::PromptBuilder;
use crate::services::{report_file, AgentSession};
use crate::ui;
use crate::Result;
use colored::Colorize;
use std::path::Path;

pub async fn run(file: Option<&Path>) -> Result<()> {
    let config = ReqlensConfig::load(&std::env::current_dir()?)?;
    let requirement = super::read_requirement(file)?;

    let client = GeminiClient::from_config(&config)?;
    let prompts = PromptBuilder::new(config.templates_dir.clone());
    let mut session = AgentSession::new(requirement);

    let spinner = ui::spinner("Generating clarifying questions...");
    let result = session.clarify(&client, &prompts).await;
    spinner.finish_and_clear();
    result?;

    if session.questions.is_empty() {
        anyhow::bail!("model returned no clarifying questions");
    }

    let answers = ui::collect_answers(&session.questions)?;
    session.record_answers(answers);

    let spinner = ui::spinner("Improving analysis with your answers...");
    let result = session.improve(&client, &prompts).await;
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
