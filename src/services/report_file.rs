//! Report file persistence
//!
//! The report file is a pretty-printed UTF-8 JSON copy of the last
//! successful report, overwritten wholesale on each run. It is only
//! written after validation, so a failed run never leaves a partial
//! file behind.

use crate::models::QualityReport;
use crate::{Context, Result};
use std::path::Path;

/// Write the validated report as pretty-printed JSON.
pub fn save_report(report: &QualityReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

/// Read a report file back as a raw JSON value for validation.
pub fn load_report_value(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read report file {}", path.display()))?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("report file {} is not valid JSON", path.display()))?;
    Ok(value)
}
