//! Configuration management for widgetkit
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DATE_PICKER_PLACEHOLDER, LOADING_TEXT, SIBLING_COUNT_MAX, TICK_RATE_DEFAULT_MS,
    TICK_RATE_MAX_MS, TICK_RATE_MIN_MS,
};
use crate::pagination::DEFAULT_SIBLING_COUNT;
use crate::ui::components::{LoadingSize, LoadingVariant, PaginationSize};
use crate::utils::datetime;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Demos the gallery can open on startup
pub const DEMO_NAMES: [&str; 6] = ["pagination", "date_picker", "accordion", "input", "card", "loading"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub pagination: PaginationConfig,
    pub date_picker: DatePickerConfig,
    pub loading: LoadingConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Demo shown on startup: one of [`DEMO_NAMES`]
    pub default_demo: String,
    /// Event loop tick interval in milliseconds (drives animations)
    pub tick_rate_ms: u64,
}

/// Pagination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Pages shown on each side of the current page
    pub sibling_count: u32,
    /// Show first/last page controls
    pub show_first_last: bool,
    /// Show previous/next page controls
    pub show_prev_next: bool,
    /// Cell size: "sm", "md" or "lg"
    pub size: PaginationSize,
    /// Page count used by the gallery demo
    pub demo_pages: u32,
}

/// Date picker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePickerConfig {
    /// strftime pattern for the selected value
    pub date_format: String,
    /// Text shown when nothing is selected
    pub placeholder: String,
    /// Earliest selectable date (inclusive)
    pub min_date: Option<NaiveDate>,
    /// Latest selectable date (inclusive)
    pub max_date: Option<NaiveDate>,
}

/// Loading indicator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    pub variant: LoadingVariant,
    pub size: LoadingSize,
    pub text: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_demo: DEMO_NAMES[0].to_string(),
            tick_rate_ms: TICK_RATE_DEFAULT_MS,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            sibling_count: DEFAULT_SIBLING_COUNT,
            show_first_last: true,
            show_prev_next: true,
            size: PaginationSize::default(),
            demo_pages: 20,
        }
    }
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DEFAULT_DATE_FORMAT.to_string(),
            placeholder: DATE_PICKER_PLACEHOLDER.to_string(),
            min_date: None,
            max_date: None,
        }
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            variant: LoadingVariant::default(),
            size: LoadingSize::default(),
            text: LOADING_TEXT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level; `info` when the configured value is not a level
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.level).unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("widgetkit.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("widgetkit").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !DEMO_NAMES.contains(&self.ui.default_demo.as_str()) {
            anyhow::bail!(
                "default_demo must be one of {}, got '{}'",
                DEMO_NAMES.join(", "),
                self.ui.default_demo
            );
        }

        if self.ui.tick_rate_ms < TICK_RATE_MIN_MS || self.ui.tick_rate_ms > TICK_RATE_MAX_MS {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {} milliseconds, got {}",
                TICK_RATE_MIN_MS,
                TICK_RATE_MAX_MS,
                self.ui.tick_rate_ms
            );
        }

        self.validate_pagination()?;
        self.validate_date_picker()?;

        if log::LevelFilter::from_str(&self.logging.level).is_err() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    fn validate_pagination(&self) -> Result<()> {
        let pagination = &self.pagination;
        if pagination.sibling_count == 0 || pagination.sibling_count > SIBLING_COUNT_MAX {
            anyhow::bail!(
                "sibling_count must be between 1 and {}, got {}",
                SIBLING_COUNT_MAX,
                pagination.sibling_count
            );
        }
        if pagination.demo_pages == 0 {
            anyhow::bail!("demo_pages must be at least 1");
        }
        Ok(())
    }

    fn validate_date_picker(&self) -> Result<()> {
        let picker = &self.date_picker;

        let sample = NaiveDate::from_ymd_opt(2025, 1, 31).context("Invalid sample date")?;
        let formatted = datetime::format_with_checked(sample, &picker.date_format);
        if formatted.is_none() {
            anyhow::bail!("Invalid date_format '{}'", picker.date_format);
        }

        if let (Some(min), Some(max)) = (picker.min_date, picker.max_date) {
            if min > max {
                anyhow::bail!("min_date {} is after max_date {}", min, max);
            }
        }
        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# widgetkit Configuration File\n# Generated on {}\n\n",
            datetime::format_ymd(datetime::today())
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("widgetkit"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
