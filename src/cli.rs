//! Command-line interface for the `svg2gds` binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use svg2gds_core::ApproximationMethod;
use svg2gds_settings::ConfigOverrides;

/// Where the path document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

/// Where the conversion is written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl From<&str> for Source {
    fn from(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl From<&str> for Sink {
    fn from(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Curve approximation method as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Fixed,
    Adaptive,
}

impl From<MethodArg> for ApproximationMethod {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::Fixed => Self::Fixed,
            MethodArg::Adaptive => Self::Adaptive,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "svg2gds",
    version = crate::VERSION_LINE,
    about = "Approximate curved paths as polygons for GDSII export",
    after_help = "Without --config, <config_dir>/svg2gds/config.toml is used when present.\n\
                  Command-line options override file values."
)]
pub struct Cli {
    /// Path document (JSON), or - for stdin
    pub input: String,

    /// Polygon output (JSON), or - for stdout
    pub output: String,

    /// Curve approximation method
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,

    /// Parameter steps per segment (fixed)
    #[arg(long)]
    pub steps: Option<u32>,

    /// Maximum chord deviation (adaptive)
    #[arg(long, allow_negative_numbers = true)]
    pub max_error: Option<f64>,

    /// Scale geometry to this bounding-box width
    #[arg(long, allow_negative_numbers = true)]
    pub desired_width: Option<f64>,

    /// Keep the source y axis
    #[arg(long)]
    pub no_flip_y: bool,

    /// Move the bounding-box centre to the origin before scaling
    #[arg(long)]
    pub center: bool,

    /// Read settings from a .toml or .json file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// A fully parsed conversion request
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertArgs {
    pub input: Source,
    pub output: Sink,
    pub config: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            method: self.method.map(ApproximationMethod::from),
            steps: self.steps,
            max_error: self.max_error,
            desired_width: self.desired_width,
            no_flip_y: self.no_flip_y,
            center_on_origin: self.center,
        }
    }

    pub fn into_convert_args(self) -> ConvertArgs {
        ConvertArgs {
            overrides: self.overrides(),
            input: Source::from(self.input.as_str()),
            output: Sink::from(self.output.as_str()),
            config: self.config,
        }
    }
}
