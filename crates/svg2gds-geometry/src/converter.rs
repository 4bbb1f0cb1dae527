//! Path-to-polygon conversion pipeline
//!
//! Runs the Path Assembler over every path of a document in input order and
//! hands the combined polygon list to the Geometry Transformer. The result
//! carries the effective scale factor so an exporter can record the units it
//! was given.

use crate::approximator::ApproximationStats;
use crate::assembler::PathAssembler;
use crate::path::{Path, PathDocument};
use crate::transform::{GeometryTransformer, TransformReport};
use serde::Serialize;
use svg2gds_core::{ApproximationConfig, BoundingBox, Polygon, Result, TransformConfig};

/// Counters for a whole conversion
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub paths: usize,
    pub segments: usize,
    pub polygons: usize,
    pub points: usize,
    /// Adaptive intervals accepted at the depth cap
    pub depth_limited: usize,
}

/// Polygons ready for export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub polygons: Vec<Polygon>,
    /// Factor applied to document units, 1.0 when no scaling happened
    pub scale_factor: f64,
    pub bounds: Option<BoundingBox>,
    pub stats: ConversionStats,
}

impl Conversion {
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

/// Validated approximation + transform pipeline
#[derive(Debug, Clone)]
pub struct Converter {
    assembler: PathAssembler,
    transformer: GeometryTransformer,
}

impl Converter {
    /// Create a converter, validating both configurations up front
    pub fn new(approximation: ApproximationConfig, transform: TransformConfig) -> Result<Self> {
        Ok(Self {
            assembler: PathAssembler::new(&approximation)?,
            transformer: GeometryTransformer::new(transform)?,
        })
    }

    pub fn convert_document(&self, document: &PathDocument) -> Result<Conversion> {
        self.convert(&document.paths)
    }

    /// Approximate and transform `paths`
    ///
    /// Errors from an individual path are wrapped with its index.
    pub fn convert(&self, paths: &[Path]) -> Result<Conversion> {
        let mut polygons = Vec::new();
        let mut approximation = ApproximationStats::default();

        for (index, path) in paths.iter().enumerate() {
            let assembly = self
                .assembler
                .assemble(path)
                .map_err(|e| e.in_path(index))?;
            tracing::debug!(
                path = index,
                polygons = assembly.polygons.len(),
                "Converted path"
            );
            approximation.merge(&assembly.stats);
            polygons.extend(assembly.polygons);
        }

        if polygons.is_empty() {
            tracing::warn!(paths = paths.len(), "No geometry found in path document");
        }

        let report: TransformReport = self.transformer.apply(&mut polygons)?;

        let stats = ConversionStats {
            paths: paths.len(),
            segments: approximation.segments,
            polygons: polygons.len(),
            points: polygons.iter().map(Polygon::len).sum(),
            depth_limited: approximation.depth_limited,
        };

        if stats.depth_limited > 0 {
            tracing::warn!(
                intervals = stats.depth_limited,
                "Some curves could not reach the requested max_error"
            );
        }

        tracing::info!(
            paths = stats.paths,
            segments = stats.segments,
            polygons = stats.polygons,
            points = stats.points,
            scale = report.scale.factor(),
            "Conversion complete"
        );

        Ok(Conversion {
            polygons,
            scale_factor: report.scale.factor(),
            bounds: report.bounds,
            stats,
        })
    }
}
