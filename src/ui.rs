//! Console surface: requirement input, report rendering, Q&A capture.

use crate::models::{ClarifyingQuestion, QualityReport};
use crate::Result;
use colored::Colorize;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead};
use std::time::Duration;

/// Read a multi-line requirement from stdin, terminated by a blank line.
pub fn read_requirement_interactive() -> Result<String> {
    println!("Paste your requirement. Press Enter on an empty line to finish:\n");

    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n").trim().to_string())
}

/// Spinner shown while the model call is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print the sectioned report.
pub fn render_report(report: &QualityReport) {
    println!();
    println!("{}", "============================".cyan());
    println!("{}", " Requirement Review Report".cyan().bold());
    println!("{}", "============================".cyan());
    println!();

    println!("{} {}", "Summary:".bold(), report.summary);
    println!();

    let score = report.clarity_score.to_string();
    let score = match report.clarity_score {
        80..=100 => score.green(),
        50..=79 => score.yellow(),
        _ => score.red(),
    };
    println!("{} {} / 100", "Clarity Score:".bold(), score);
    println!("{} {}", "Reason:".bold(), report.clarity_score_reason);
    println!();

    render_list("Ambiguities:", &report.ambiguities);
    render_list("Missing information:", &report.missing_information);
    render_list("Assumptions:", &report.assumptions);
    render_list("Risks & dependencies:", &report.risks_and_dependencies);
    render_list("Edge cases:", &report.edge_cases);
    render_list("Acceptance criteria:", &report.acceptance_criteria);
    render_list("Suggested test scenarios:", &report.test_scenarios);
}

fn render_list(title: &str, items: &[String]) {
    println!("{}", title.bold());
    if items.is_empty() {
        println!("- (none)");
        println!();
        return;
    }
    for item in items {
        println!("- {}", item);
    }
    println!();
}

/// Show each clarifying question and collect an answer for it.
/// Empty answers are allowed and mean "unanswered".
pub fn collect_answers(questions: &[ClarifyingQuestion]) -> Result<Vec<String>> {
    println!();
    println!(
        "{}",
        "Answer the clarifying questions (leave blank to skip):".bold()
    );

    let mut answers = Vec::with_capacity(questions.len());
    for q in questions {
        println!();
        println!("{} {}", format!("{}:", q.id).cyan().bold(), q.question);
        println!("  {}", q.why_it_matters.dimmed());

        let answer: String = Input::new()
            .with_prompt(format!("Answer for {}", q.id))
            .allow_empty(true)
            .interact_text()?;
        answers.push(answer);
    }

    Ok(answers)
}
