//! Check command: validate a saved report file against the schema.

use crate::models::ReqlensConfig;
use crate::services::report_file;
use crate::validator::validate_report;
use crate::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub fn run(report: Option<&Path>) -> Result<()> {
    let path: PathBuf = match report {
        Some(path) => path.to_path_buf(),
        None => {
            let config = ReqlensConfig::load(&std::env::current_dir()?)?;
            config.report_path
        }
    };

    let value = report_file::load_report_value(&path)?;
    let report = validate_report(&value)?;

    println!(
        "{}",
        format!(
            "✓ {} looks valid (clarity score {} / 100)",
            path.display(),
            report.clarity_score
        )
        .green()
    );
    Ok(())
}
