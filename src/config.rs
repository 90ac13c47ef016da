use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional settings file, looked up in the working directory.
pub const CONFIG_FILE: &str = "cord-explorer.json";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Settings for the dashboard. Every field has a default, so the settings
/// file only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// CSV file opened at start-up.
    pub data_path: PathBuf,
    /// Earliest year shown in the timeline and the year selector.
    pub min_year: i32,
    pub top_journals: usize,
    pub top_sources: usize,
    /// Rows shown in the raw-data preview.
    pub preview_rows: usize,
    /// Words drawn in the word cloud.
    pub cloud_words: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/metadata.csv"),
            min_year: 2000,
            top_journals: 20,
            top_sources: 10,
            preview_rows: 30,
            cloud_words: 200,
        }
    }
}

impl DashboardConfig {
    /// Read the settings file at `path`, or return the defaults when it does
    /// not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.min_year, 2000);
        assert_eq!(config.data_path, PathBuf::from("data/metadata.csv"));
        assert_eq!(config.cloud_words, 200);
    }

    #[test]
    fn partial_file_overrides_some_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "min_year": 2010, "data_path": "other.csv" }"#).unwrap();

        let config = DashboardConfig::load_or_default(&path).unwrap();
        assert_eq!(config.min_year, 2010);
        assert_eq!(config.data_path, PathBuf::from("other.csv"));
        assert_eq!(config.top_journals, 20);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "minyear": 2010 }"#).unwrap();

        let err = DashboardConfig::load_or_default(&path).unwrap_err();
        assert!(format!("{err:#}").contains("minyear"));
    }
}
