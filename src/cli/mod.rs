pub mod agent;
pub mod analyze;
pub mod check;
pub mod init;

use crate::{Context, Result};
use std::path::Path;

/// Read the requirement text from a file, or interactively from stdin.
pub(crate) fn read_requirement(file: Option<&Path>) -> Result<String> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read requirement file {}", path.display()))?,
        None => crate::ui::read_requirement_interactive()?,
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        anyhow::bail!("no requirement provided");
    }
    Ok(text)
}
