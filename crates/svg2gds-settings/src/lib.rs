//! svg2gds Settings Crate
//!
//! Loads, validates and saves converter configuration, and layers
//! command-line overrides on top of file values.

pub mod config;
pub mod error;

pub use config::{Config, ConfigOverrides, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
