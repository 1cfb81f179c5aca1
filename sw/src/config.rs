//! Configuration for surveywizard

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Shared secret the sheet store endpoint expects by default
pub const DEFAULT_SECRET: &str = "NOZIPHO";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Submission endpoint of the sheet store
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Shared secret sent with every submission
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Path of the local draft file
    #[serde(default = "default_draft_path")]
    pub draft_path: PathBuf,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8787/submit".to_string()
}

fn default_secret() -> String {
    DEFAULT_SECRET.to_string()
}

fn default_draft_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("surveywizard")
        .join("draft.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            secret: default_secret(),
            draft_path: default_draft_path(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("surveywizard").join("config.yml")),
            Some(PathBuf::from("surveywizard.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");

        let mut config = Config::default();
        config.endpoint = "http://example.test/submit".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.endpoint, "http://example.test/submit");
        assert_eq!(loaded.secret, DEFAULT_SECRET);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "secret: hushhush\n").unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.secret, "hushhush");
        assert_eq!(loaded.endpoint, default_endpoint());
    }
}
