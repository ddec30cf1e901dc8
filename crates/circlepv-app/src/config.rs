//! Configuration management for circle-pv
//!
//! Config stored at: ~/.config/circle-pv/config.json

use circlepv_domain::constants::DEFAULT_JUNCTION_BOX_VALUE_USD;
use circlepv_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Recycled value per panel added when the junction box is included (USD)
    #[serde(default = "default_junction_box_value")]
    pub junction_box_value_usd: f64,

    /// Pause before showing a result, in milliseconds (0 = immediate)
    #[serde(default)]
    pub result_delay_ms: u64,

    /// TOML file replacing the built-in material table
    #[serde(default)]
    pub material_table: Option<PathBuf>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_junction_box_value() -> f64 {
    DEFAULT_JUNCTION_BOX_VALUE_USD
}

/// Accept only a finite, non-negative junction box value
pub fn validate_junction_box_value(value_usd: f64) -> Result<f64> {
    if value_usd.is_finite() && value_usd >= 0.0 {
        Ok(value_usd)
    } else {
        Err(ConfigError::ParseError(format!(
            "junction box value must be a finite, non-negative amount, got {}",
            value_usd
        ))
        .into())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            junction_box_value_usd: default_junction_box_value(),
            result_delay_ms: 0,
            material_table: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("circle-pv");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific path, falling back to defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Circle PV Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Output format:      {}", self.output_format)?;
        writeln!(f, "Junction box value: ${:.2} per panel", self.junction_box_value_usd)?;
        writeln!(f, "Result delay:       {} ms", self.result_delay_ms)?;
        writeln!(
            f,
            "Material table:     {}",
            self.material_table
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:        {}", path.display())?;
        }

        Ok(())
    }
}
