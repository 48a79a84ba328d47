//! Init command: write a default reqlens.toml.

use crate::models::config::{ReqlensConfig, CONFIG_FILENAME};
use crate::Result;
use colored::Colorize;

pub fn run(force: bool) -> Result<()> {
    let path = std::env::current_dir()?.join(CONFIG_FILENAME);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    ReqlensConfig::default().save(&path)?;
    println!(
        "{}",
        format!("✓ Wrote default config to {}", path.display()).green()
    );
    Ok(())
}
