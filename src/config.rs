use crate::core::name_grouper::DEFAULT_THRESHOLD;
use crate::error::{SplitError, SplitResult};
use crate::utils::fuzzy::Scorer;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Highest usable grouping threshold
pub const MAX_THRESHOLD: u8 = 99;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Grouping
    pub threshold: u8,
    pub scorer: Scorer,

    // Files
    pub sample_path: PathBuf,
    pub results_dir: PathBuf,
    pub institutions_file: String,
    pub teams_file: String,

    // Normalization
    pub unknown_region: String,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            scorer: Scorer::TokenSortRatio,
            sample_path: PathBuf::from("data/2015.csv"),
            results_dir: PathBuf::from("results"),
            institutions_file: "Institutions.csv".to_string(),
            teams_file: "Teams.csv".to_string(),
            unknown_region: "Unknown".to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from the user config directory, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from an explicit file
    ///
    /// A missing file yields defaults. A corrupt file is moved aside to
    /// `*.json.corrupt` and defaults are used.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> SplitResult<()> {
        // A name must score strictly above the threshold, and 100 is the top
        // score, so 100 would keep names differing only in case apart.
        if self.threshold > MAX_THRESHOLD {
            return Err(SplitError::Config(format!(
                "threshold must be between 0 and {}, got {}",
                MAX_THRESHOLD,
                self.threshold
            )));
        }
        if self.institutions_file == self.teams_file {
            return Err(SplitError::Config(format!(
                "institutions and teams would both be written to '{}'",
                self.teams_file
            )));
        }
        Ok(())
    }

    pub fn institutions_path(&self) -> PathBuf {
        self.results_dir.join(&self.institutions_file)
    }

    pub fn teams_path(&self) -> PathBuf {
        self.results_dir.join(&self.teams_file)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("teamsplit")
        .join("config.json")
}
