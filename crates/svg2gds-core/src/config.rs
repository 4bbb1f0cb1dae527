//! Approximation and transform configuration
//!
//! Both structs are plain serde data so that the settings crate can load them
//! from JSON or TOML and the command line can override individual fields.
//! Only the numeric field that belongs to the active method is validated.

use crate::error::{GeometryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of linear steps per segment for fixed subdivision
pub const DEFAULT_STEPS: u32 = 1000;

/// Upper bound on steps per segment for fixed subdivision
pub const MAX_STEPS: u32 = 1_000_000;

/// Default chord error bound for adaptive refinement, in document units
pub const DEFAULT_MAX_ERROR: f64 = 0.01;

/// Curve approximation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApproximationMethod {
    /// A fixed number of uniformly spaced parameter steps per segment
    #[default]
    Fixed,
    /// Recursive subdivision until the chord error is within bounds
    Adaptive,
}

impl fmt::Display for ApproximationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Adaptive => write!(f, "adaptive"),
        }
    }
}

impl FromStr for ApproximationMethod {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "adaptive" => Ok(Self::Adaptive),
            other => Err(GeometryError::invalid_config(
                "method",
                format!("unknown method '{other}', expected 'fixed' or 'adaptive'"),
            )),
        }
    }
}

/// Curve approximation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproximationConfig {
    /// Active approximation policy
    pub method: ApproximationMethod,
    /// Steps per segment (fixed method only)
    pub steps: u32,
    /// Maximum chord error in document units (adaptive method only)
    pub max_error: f64,
}

impl Default for ApproximationConfig {
    fn default() -> Self {
        Self {
            method: ApproximationMethod::Fixed,
            steps: DEFAULT_STEPS,
            max_error: DEFAULT_MAX_ERROR,
        }
    }
}

impl ApproximationConfig {
    /// Fixed subdivision with `steps` steps per segment
    pub fn fixed(steps: u32) -> Self {
        Self {
            method: ApproximationMethod::Fixed,
            steps,
            ..Self::default()
        }
    }

    /// Adaptive refinement bounded by `max_error`
    pub fn adaptive(max_error: f64) -> Self {
        Self {
            method: ApproximationMethod::Adaptive,
            max_error,
            ..Self::default()
        }
    }

    /// Validate the field used by the active method
    pub fn validate(&self) -> Result<()> {
        match self.method {
            ApproximationMethod::Fixed => validate_steps(self.steps),
            ApproximationMethod::Adaptive => validate_max_error(self.max_error),
        }
    }
}

/// Reject a step count below one or above [`MAX_STEPS`]
pub fn validate_steps(steps: u32) -> Result<()> {
    if steps == 0 {
        return Err(GeometryError::invalid_config("steps", "must be at least 1"));
    }
    if steps > MAX_STEPS {
        return Err(GeometryError::invalid_config(
            "steps",
            format!("must be at most {MAX_STEPS}, got {steps}"),
        ));
    }
    Ok(())
}

/// Reject a chord error bound that is not a positive finite number
pub fn validate_max_error(max_error: f64) -> Result<()> {
    if !max_error.is_finite() || max_error <= 0.0 {
        return Err(GeometryError::invalid_config(
            "max_error",
            format!("must be a positive finite number, got {max_error}"),
        ));
    }
    Ok(())
}

/// Post-approximation transform settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Scale uniformly so the bounding box is this wide
    pub desired_width: Option<f64>,
    /// Negate every y coordinate after scaling
    pub flip_y: bool,
    /// Translate the bounding-box centre to the origin before scaling
    pub center_on_origin: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            desired_width: None,
            flip_y: true,
            center_on_origin: false,
        }
    }
}

impl TransformConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(width) = self.desired_width {
            if !width.is_finite() || width <= 0.0 {
                return Err(GeometryError::invalid_config(
                    "desired_width",
                    format!("must be a positive finite number, got {width}"),
                ));
            }
        }
        Ok(())
    }
}
