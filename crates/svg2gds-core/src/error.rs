//! Error handling for svg2gds
//!
//! Every failure the approximation engine can report is a variant of
//! [`GeometryError`]. Each variant names the configuration field or the
//! segment that triggered it so callers can decide on their own retry policy.
//!
//! Recursion-depth exhaustion in the adaptive refiner is not an error:
//! it degrades to a chord and is surfaced as a diagnostic count instead.

use thiserror::Error;

/// Geometry engine error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A configuration value is out of its valid domain
    #[error("Invalid config '{field}': {reason}")]
    InvalidConfig {
        /// The offending configuration field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Scaling was requested but the measured width is zero
    #[error("Degenerate bounding box: width {width} cannot be scaled")]
    DegenerateBoundingBox {
        /// The measured bounding-box width.
        width: f64,
    },

    /// A segment carries non-finite control data
    #[error("Malformed segment {segment}: {reason}")]
    MalformedSegment {
        /// Index of the segment within its path.
        segment: usize,
        /// Which value was not finite.
        reason: String,
    },

    /// An error raised while converting one path of a document
    #[error("Path {path}: {source}")]
    InPath {
        /// Index of the path within the document.
        path: usize,
        /// The underlying error.
        #[source]
        source: Box<GeometryError>,
    },
}

impl GeometryError {
    /// Create an invalid-config error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed-segment error
    pub fn malformed_segment(segment: usize, reason: impl Into<String>) -> Self {
        Self::MalformedSegment {
            segment,
            reason: reason.into(),
        }
    }

    /// Attach the index of the path being converted
    pub fn in_path(self, path: usize) -> Self {
        Self::InPath {
            path,
            source: Box::new(self),
        }
    }

    /// The innermost error, with any path wrappers removed
    pub fn root_cause(&self) -> &GeometryError {
        match self {
            Self::InPath { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
