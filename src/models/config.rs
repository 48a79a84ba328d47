//! Reqlens configuration
//!
//! Loaded from `reqlens.toml` in the working directory, falling back to
//! the user config directory, falling back to built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "reqlens.toml";

/// Tool configuration. Every field has a default so a missing or
/// partial config file is always usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReqlensConfig {
    /// Model identifier sent to the generation endpoint.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generation API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Where the last successful report is written (overwritten each run).
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,

    /// Directory with prompt template overrides
    /// (analyze.md, clarify.md, improve.md).
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_report_path() -> PathBuf {
    PathBuf::from("last_report.json")
}

impl Default for ReqlensConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            report_path: default_report_path(),
            templates_dir: None,
        }
    }
}

impl ReqlensConfig {
    /// Load config, checking `<working_dir>/reqlens.toml` first, then
    /// the user config dir, then defaults.
    pub fn load(working_dir: &Path) -> anyhow::Result<Self> {
        let local = working_dir.join(CONFIG_FILENAME);
        if local.exists() {
            return Self::load_file(&local);
        }

        if let Some(user_dir) = dirs::config_dir() {
            let user = user_dir.join("reqlens").join(CONFIG_FILENAME);
            if user.exists() {
                return Self::load_file(&user);
            }
        }

        Ok(Self::default())
    }

    fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ReqlensConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config as pretty TOML.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ReqlensConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.report_path, PathBuf::from("last_report.json"));
        assert!(config.templates_dir.is_none());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ReqlensConfig::load(temp.path()).unwrap();
        assert_eq!(config.model, ReqlensConfig::default().model);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);

        let mut config = ReqlensConfig::default();
        config.model = "gemini-1.5-flash".to_string();
        config.report_path = PathBuf::from("out/report.json");
        config.save(&path).unwrap();

        let loaded = ReqlensConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.model, "gemini-1.5-flash");
        assert_eq!(loaded.report_path, PathBuf::from("out/report.json"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "model = \"gemini-1.5-pro\"\n").unwrap();

        let loaded = ReqlensConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.model, "gemini-1.5-pro");
        assert_eq!(loaded.api_key_env, "GEMINI_API_KEY");
    }
}
