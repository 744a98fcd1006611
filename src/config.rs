//! Configuration management and validation.
//!
//! Provides the sheet layout used to locate headers and data rows, and the
//! calendar export settings. Configuration is layered: built-in defaults, an
//! optional TOML file, environment variables, then command-line overrides.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CALENDAR_FILE, DEFAULT_FIRST_DATA_ROW,
    DEFAULT_HEADER_ROW, DEFAULT_LAST_DATA_ROW, DEFAULT_PRODUCT_ID, DEFAULT_TIMEZONE,
    ENV_TIMEZONE,
};
use crate::{Error, Result};

/// Where the header and data rows live on the first sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// 1-indexed row holding the column labels
    pub header_row: u32,

    /// First 1-indexed row holding course data
    pub first_data_row: u32,

    /// Last row ever read, regardless of how far the sheet extends
    pub last_data_row: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_row: DEFAULT_HEADER_ROW,
            first_data_row: DEFAULT_FIRST_DATA_ROW,
            last_data_row: DEFAULT_LAST_DATA_ROW,
        }
    }
}

impl LayoutConfig {
    pub fn with_header_row(mut self, header_row: u32) -> Self {
        self.header_row = header_row;
        self
    }

    pub fn with_data_rows(mut self, first: u32, last: u32) -> Self {
        self.first_data_row = first;
        self.last_data_row = last;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.header_row == 0 {
            return Err(Error::configuration("header_row is 1-indexed and must be at least 1"));
        }
        if self.first_data_row <= self.header_row {
            return Err(Error::configuration(format!(
                "first_data_row ({}) must come after header_row ({})",
                self.first_data_row, self.header_row
            )));
        }
        if self.last_data_row < self.first_data_row {
            return Err(Error::configuration(format!(
                "last_data_row ({}) must not precede first_data_row ({})",
                self.last_data_row, self.first_data_row
            )));
        }
        Ok(())
    }
}

/// Calendar export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// IANA time zone the sheet's wall-clock times are in
    pub timezone: String,

    /// Default path of the written calendar file
    pub output_file: PathBuf,

    /// PRODID of the generated calendar
    pub product_id: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            output_file: PathBuf::from(DEFAULT_CALENDAR_FILE),
            product_id: DEFAULT_PRODUCT_ID.to_string(),
        }
    }
}

impl CalendarConfig {
    /// Parsed time zone
    pub fn tz(&self) -> Result<Tz> {
        self.timezone.parse::<Tz>().map_err(|_| {
            Error::configuration(format!("Unknown time zone '{}'", self.timezone))
        })
    }
}

/// Global configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub calendar: CalendarConfig,
}

impl Config {
    /// Set the calendar time zone
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.calendar.timezone = timezone.into();
        self
    }

    /// Set the calendar output file
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.calendar.output_file = path.into();
        self
    }

    /// Replace the sheet layout
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Default per-user configuration file location
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine configuration directory"))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;
        let config: Config = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration using the layered approach (defaults -> file -> env)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(timezone) = std::env::var(ENV_TIMEZONE) {
            if !timezone.trim().is_empty() {
                debug!("Time zone from {}: {}", ENV_TIMEZONE, timezone);
                self.calendar.timezone = timezone.trim().to_string();
            }
        }
    }

    /// Validate the complete configuration
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.calendar.tz()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.layout.header_row, 3);
        assert_eq!(config.layout.first_data_row, 4);
        assert_eq!(config.layout.last_data_row, 999);
        assert_eq!(config.calendar.timezone, "America/New_York");
        assert_eq!(config.calendar.output_file, PathBuf::from("schedule.ics"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_layout_validation() {
        assert!(LayoutConfig::default().with_header_row(4).validate().is_err());
        assert!(LayoutConfig::default().with_data_rows(10, 9).validate().is_err());
        assert!(LayoutConfig::default().with_header_row(0).validate().is_err());
        assert!(
            LayoutConfig::default()
                .with_header_row(1)
                .with_data_rows(2, 2)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_builders_override_sections() {
        let layout = LayoutConfig::default().with_header_row(1).with_data_rows(2, 50);
        let config = Config::default()
            .with_layout(layout.clone())
            .with_output_file("fall.ics")
            .with_timezone("America/Chicago");

        assert_eq!(config.layout, layout);
        assert_eq!(config.calendar.output_file, PathBuf::from("fall.ics"));
        assert_eq!(config.calendar.timezone, "America/Chicago");
        assert_eq!(config.calendar.product_id, DEFAULT_PRODUCT_ID);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_timezone_rejected() {
        let config = Config::default().with_timezone("Mars/Olympus_Mons");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus_Mons"));

        let config = Config::default().with_timezone("Europe/London");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[calendar]\ntimezone = \"America/Chicago\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.calendar.timezone, "America/Chicago");
        assert_eq!(config.calendar.product_id, DEFAULT_PRODUCT_ID);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[layout]\nheader_row = \"three\"").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
