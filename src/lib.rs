//! # svg2gds
//!
//! Approximates curved vector paths as polygons for GDSII layout export.
//!
//! ## Architecture
//!
//! svg2gds is organized as a workspace with multiple crates:
//!
//! 1. **svg2gds-core** - Points, polygons, bounding boxes, engine configuration, errors
//! 2. **svg2gds-geometry** - Segment evaluation, fixed and adaptive approximation,
//!    path assembly, scaling and Y flip
//! 3. **svg2gds-settings** - Configuration files and command-line overrides
//! 4. **svg2gds** - This crate: logging setup, document I/O and the binary
//!
//! The binary reads a path document (JSON), converts it, and writes the
//! resulting polygons, scale factor and bounding box as JSON.

pub mod cli;

use anyhow::Context;
use std::fs;
use std::io::{self, Read, Write};

pub use cli::{Cli, ConvertArgs, MethodArg, Sink, Source};

pub use svg2gds_core::{
    ApproximationConfig, ApproximationMethod, BoundingBox, GeometryError, Point, Polygon,
    TransformConfig,
};
pub use svg2gds_geometry::{Conversion, ConversionStats, Converter, Path, PathDocument, Segment};
pub use svg2gds_settings::{Config, ConfigOverrides, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Version line printed by `--version`
pub const VERSION_LINE: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - RUST_LOG environment variable support, `info` by default
/// - Output on stderr, leaving stdout free for JSON results
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// Resolve the effective configuration for a conversion
///
/// An explicit config file must exist. Otherwise the default location is
/// used when present. Command-line overrides are applied last.
pub fn resolve_config(args: &ConvertArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_default().context("failed to load default config")?,
    };
    config
        .merge(&args.overrides)
        .context("invalid command-line option")?;
    Ok(config)
}

/// Read and parse a path document
pub fn read_document(source: &Source) -> anyhow::Result<PathDocument> {
    let content = match source {
        Source::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("error reading stdin")?;
            buf
        }
        Source::File(path) => fs::read_to_string(path)
            .with_context(|| format!("error reading {}", path.display()))?,
    };
    serde_json::from_str(&content).context("input is not a valid path document")
}

/// Serialize a conversion as pretty JSON
pub fn write_conversion(sink: &Sink, conversion: &Conversion) -> anyhow::Result<()> {
    let mut json = serde_json::to_string_pretty(conversion)?;
    json.push('\n');
    match sink {
        Sink::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .context("error writing stdout")?;
            stdout.flush()?;
        }
        Sink::File(path) => fs::write(path, json)
            .with_context(|| format!("error writing {}", path.display()))?,
    }
    Ok(())
}

/// Run one conversion end to end
pub fn run(args: &ConvertArgs) -> anyhow::Result<Conversion> {
    let config = resolve_config(args)?;
    tracing::debug!(?config, "Resolved configuration");

    let document = read_document(&args.input)?;
    let converter = Converter::new(config.approximation, config.transform)?;
    let conversion = converter.convert_document(&document)?;
    write_conversion(&args.output, &conversion)?;
    Ok(conversion)
}
