//! Configuration file (tablier.toml).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// JSON-lines file with sample recipes
    pub samples: PathBuf,
    /// Where rendered previews are written
    pub output: PathBuf,
    /// Template source directory, read in watch mode
    pub templates: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            samples: PathBuf::from("fixtures/sample_recipes.jsonlines"),
            output: PathBuf::from("preview"),
            templates: PathBuf::from("crates/tablier-static/templates"),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WatchConfig {
    /// Only changes to files ending with this trigger regeneration
    pub suffix: String,
    /// Events closer together than this are handled as one batch
    pub settle_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            suffix: ".html".to_string(),
            settle_ms: 100,
        }
    }
}

impl WatchConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("tablier.toml")).unwrap();

        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.paths.output, PathBuf::from("preview"));
        assert_eq!(config.watch.suffix, ".html");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tablier.toml");
        fs::write(&path, "[paths]\noutput = \"src\"\n\n[watch]\nsettle_ms = 250\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.paths.output, PathBuf::from("src"));
        assert_eq!(
            config.paths.samples,
            PathBuf::from("fixtures/sample_recipes.jsonlines")
        );
        assert_eq!(config.watch.settle(), Duration::from_millis(250));
        assert_eq!(config.watch.suffix, ".html");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tablier.toml");
        fs::write(&path, "[paths\noutput = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
