//! Configuration settings for the queens solver

use crate::board::check_board_size;
use crate::search::SearchLimits;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub max_solutions: Option<usize>,
    pub max_steps: Option<u64>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Drop solutions with three queens on one line
    pub strip_collinear: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig { size: 8 },
            search: SearchConfig::default(),
            filter: FilterConfig { strip_collinear: true },
            output: OutputConfig {
                format: OutputFormat::Text,
                save: false,
                output_directory: PathBuf::from("output/solutions"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        check_board_size(self.board.size).context("Invalid board size")?;

        if self.search.max_solutions == Some(0) {
            anyhow::bail!("Maximum solutions must be positive");
        }

        if self.search.max_steps == Some(0) {
            anyhow::bail!("Maximum steps must be positive");
        }

        if self.search.timeout_seconds == Some(0) {
            anyhow::bail!("Timeout must be positive");
        }

        Ok(())
    }

    /// Search bounds described by these settings
    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            max_solutions: self.search.max_solutions,
            max_steps: self.search.max_steps,
            timeout: self.search.timeout_seconds.map(Duration::from_secs),
        }
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(size) = cli_overrides.size {
            self.board.size = size;
        }
        if let Some(max_solutions) = cli_overrides.max_solutions {
            self.search.max_solutions = Some(max_solutions);
        }
        if let Some(max_steps) = cli_overrides.max_steps {
            self.search.max_steps = Some(max_steps);
        }
        if let Some(timeout_seconds) = cli_overrides.timeout_seconds {
            self.search.timeout_seconds = Some(timeout_seconds);
        }
        if cli_overrides.keep_collinear {
            self.filter.strip_collinear = false;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.save {
            self.output.save = true;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
            self.output.save = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub size: Option<usize>,
    pub max_solutions: Option<usize>,
    pub max_steps: Option<u64>,
    pub timeout_seconds: Option<u64>,
    pub keep_collinear: bool,
    pub format: Option<OutputFormat>,
    pub save: bool,
    pub output_dir: Option<PathBuf>,
}
