//! Configuration for partial discovery.

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Scan configuration: where to look and what to admit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Root directory scanned for partial directories and links
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Extra directories admitted as-is, bypassing classification
    #[serde(default)]
    pub extra_roots: Vec<PathBuf>,

    /// Basenames excluded from link-discovered directories
    #[serde(default)]
    pub ignore: Vec<String>,

    /// When set and non-empty, only these basenames are classified at the root
    #[serde(default)]
    pub allow: Option<Vec<String>>,

    /// Template file extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_root() -> PathBuf {
    PathBuf::from("partials")
}

fn default_extension() -> String {
    "hbs".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extra_roots: Vec::new(),
            ignore: Vec::new(),
            allow: None,
            extension: default_extension(),
        }
    }
}

impl ScanConfig {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: ScanConfig = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("partialscan").join("config.yml")),
            Some(PathBuf::from("partialscan.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: ScanConfig = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(ScanConfig::default())
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
    fn defaults_fill_missing_fields() {
        let config: ScanConfig = serde_yaml::from_str("root: views/partials\n").unwrap();
        assert_eq!(config.root, PathBuf::from("views/partials"));
        assert!(config.extra_roots.is_empty());
        assert!(config.ignore.is_empty());
        assert!(config.allow.is_none());
        assert_eq!(config.extension, "hbs");
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");

        let config = ScanConfig {
            root: PathBuf::from("views/partials"),
            ignore: vec!["internal".to_string()],
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = ScanConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.root, config.root);
        assert_eq!(loaded.ignore, config.ignore);
    }
}
