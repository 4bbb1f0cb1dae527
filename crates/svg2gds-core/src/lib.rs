//! # svg2gds Core
//!
//! Core types shared by every svg2gds crate.
//! Provides the point, polygon and bounding-box value types, the
//! approximation and transform configuration, and the structured errors
//! reported by the geometry engine.

pub mod config;
pub mod data;
pub mod error;

pub use config::{
    ApproximationConfig, ApproximationMethod, TransformConfig, DEFAULT_MAX_ERROR, DEFAULT_STEPS,
    MAX_STEPS,
};

pub use data::{BoundingBox, Point, Polygon};

pub use error::{GeometryError, Result};
