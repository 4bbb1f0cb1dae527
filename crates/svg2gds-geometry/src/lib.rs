//! # svg2gds Geometry
//!
//! The curve-to-polygon approximation engine.
//!
//! ## Pipeline
//!
//! - **Segments**: lines, quadratic and cubic Béziers, and SVG elliptical arcs,
//!   evaluated exactly on `t ∈ [0, 1]`
//! - **Fixed Subdivision**: a constant number of parameter steps per segment
//! - **Adaptive Refiner**: recursive chord-error-bounded subdivision with a
//!   hard depth cap
//! - **Path Assembler**: joins per-segment point runs into one polygon per
//!   subpath
//! - **Geometry Transformer**: bounding box, uniform scale to a desired width,
//!   optional Y flip
//! - **Converter**: runs the above over a whole path document
//!
//! Parsing the source markup and writing the layout file happen outside this
//! crate; it consumes a [`PathDocument`] and produces a [`Conversion`].

pub mod adaptive;
pub mod approximator;
pub mod arc;
pub mod assembler;
pub mod converter;
pub mod path;
pub mod segment;
pub mod subdivision;
pub mod transform;

// Re-export commonly used items
pub use adaptive::{AdaptiveRefiner, Refinement, MAX_REFINE_DEPTH};
pub use approximator::{ApproximationStats, Approximator};
pub use arc::{ArcSegment, ArcShape, CenterArc};
pub use assembler::{Assembly, PathAssembler, JOIN_RELATIVE_TOLERANCE};
pub use converter::{Conversion, ConversionStats, Converter};
pub use path::{Path, PathBuilder, PathCommand, PathDocument};
pub use segment::{Curve, PreparedSegment, Segment};
pub use subdivision::subdivide_fixed;
pub use transform::{GeometryTransformer, ScaleOutcome, TransformReport};

pub use svg2gds_core::{
    ApproximationConfig, ApproximationMethod, BoundingBox, GeometryError, Point, Polygon, Result,
    TransformConfig,
};
