//! Configuration file handling for svg2gds
//!
//! A configuration file holds the two engine sections:
//! - `[approximation]`: method, steps and max_error
//! - `[transform]`: desired_width, flip_y and center_on_origin
//!
//! Files may be JSON or TOML, chosen by extension. Missing keys take their
//! defaults. Command-line values are layered on top with [`ConfigOverrides`].

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use svg2gds_core::{ApproximationConfig, ApproximationMethod, TransformConfig};

/// Name of the application directory under the platform config dir
pub const CONFIG_DIR_NAME: &str = "svg2gds";

/// File name looked up in the application config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                other.unwrap_or("no extension")
            ))),
        }
    }
}

/// Complete converter configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Curve approximation settings
    pub approximation: ApproximationConfig,
    /// Post-approximation transform settings
    pub transform: TransformConfig,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::from_path(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default config location, `<config_dir>/svg2gds/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load the default config file if it exists, otherwise the defaults
    pub fn load_default() -> SettingsResult<Self> {
        match Self::default_path() {
            Ok(path) if path.is_file() => Self::load_from_file(&path),
            Ok(_) => Ok(Self::default()),
            Err(e) => {
                tracing::debug!("Using built-in configuration: {e}");
                Ok(Self::default())
            }
        }
    }

    /// Validate both sections
    pub fn validate(&self) -> SettingsResult<()> {
        self.approximation.validate()?;
        self.transform.validate()?;
        Ok(())
    }

    /// Apply command-line overrides, then re-validate
    pub fn merge(&mut self, overrides: &ConfigOverrides) -> SettingsResult<()> {
        if let Some(method) = overrides.method {
            self.approximation.method = method;
        }
        if let Some(steps) = overrides.steps {
            self.approximation.steps = steps;
        }
        if let Some(max_error) = overrides.max_error {
            self.approximation.max_error = max_error;
        }
        if let Some(width) = overrides.desired_width {
            self.transform.desired_width = Some(width);
        }
        if overrides.no_flip_y {
            self.transform.flip_y = false;
        }
        if overrides.center_on_origin {
            self.transform.center_on_origin = true;
        }
        self.validate()
    }
}

/// Values supplied on the command line
///
/// `None` and `false` leave the file or default value untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConfigOverrides {
    pub method: Option<ApproximationMethod>,
    pub steps: Option<u32>,
    pub max_error: Option<f64>,
    pub desired_width: Option<f64>,
    pub no_flip_y: bool,
    pub center_on_origin: bool,
}

impl ConfigOverrides {
    /// Parse and store a single `key = value` override
    pub fn set(&mut self, key: &str, value: &str) -> SettingsResult<()> {
        let invalid = |reason: String| SettingsError::InvalidSetting {
            key: key.to_string(),
            reason,
        };

        match key {
            "method" => self.method = Some(value.parse()?),
            "steps" => {
                self.steps = Some(
                    value
                        .parse()
                        .map_err(|e| invalid(format!("'{value}' is not a step count: {e}")))?,
                )
            }
            "max_error" => {
                self.max_error = Some(
                    value
                        .parse()
                        .map_err(|e| invalid(format!("'{value}' is not a number: {e}")))?,
                )
            }
            "desired_width" => {
                self.desired_width = Some(
                    value
                        .parse()
                        .map_err(|e| invalid(format!("'{value}' is not a number: {e}")))?,
                )
            }
            _ => return Err(invalid("unknown setting".to_string())),
        }
        Ok(())
    }
}
