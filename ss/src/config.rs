//! Configuration for sheetstore

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the sheet store directory
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Sheet receiving survey responses
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Shared secret submissions must carry
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Address the endpoint listens on
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sheetstore")
}

fn default_sheet_name() -> String {
    crate::DEFAULT_SHEET_NAME.to_string()
}

fn default_secret() -> String {
    "NOZIPHO".to_string()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8787".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            sheet_name: default_sheet_name(),
            secret: default_secret(),
            listen_addr: default_listen_addr(),
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
            dirs::config_dir().map(|p| p.join("sheetstore").join("config.yml")),
            Some(PathBuf::from("sheetstore.yml")),
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
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.sheet_name, "Responses");
        assert_eq!(config.listen_addr, "127.0.0.1:8787");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "listen_addr: 0.0.0.0:9000\n").unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.listen_addr, "0.0.0.0:9000");
        assert_eq!(loaded.sheet_name, "Responses");
    }
}
