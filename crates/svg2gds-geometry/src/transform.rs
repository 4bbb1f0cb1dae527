//! Geometry Transformer
//!
//! Post-processing applied to the full polygon list: optional centring,
//! uniform scaling to a desired width, then an optional raw Y sign flip.
//! Every precondition is checked before the first point is touched, so a
//! failed transform leaves the polygons exactly as they were.

use serde::Serialize;
use svg2gds_core::{BoundingBox, GeometryError, Point, Polygon, Result, TransformConfig};

/// What the scale step did
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScaleOutcome {
    /// No desired width was configured
    NotRequested,
    /// A desired width was configured but there was no geometry to measure
    SkippedEmpty,
    /// Every coordinate was multiplied by `factor`
    Scaled { factor: f64 },
}

impl ScaleOutcome {
    /// Effective factor applied to the geometry
    pub fn factor(&self) -> f64 {
        match self {
            Self::Scaled { factor } => *factor,
            Self::NotRequested | Self::SkippedEmpty => 1.0,
        }
    }
}

/// Summary of an applied transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransformReport {
    /// Offset added to every point before scaling, when centring was enabled
    pub translation: Option<Point>,
    pub scale: ScaleOutcome,
    pub flipped: bool,
    /// Bounding box after all steps, `None` for an empty polygon list
    pub bounds: Option<BoundingBox>,
}

/// Applies a [`TransformConfig`] to polygon lists
#[derive(Debug, Clone, Copy)]
pub struct GeometryTransformer {
    config: TransformConfig,
}

impl GeometryTransformer {
    pub fn new(config: TransformConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Centre, scale and flip `polygons` in place
    pub fn apply(&self, polygons: &mut [Polygon]) -> Result<TransformReport> {
        let bounds = BoundingBox::from_polygons(polygons);

        if let (Some(width), Some(bbox)) = (self.config.desired_width, bounds) {
            scale_factor(&bbox, width)?;
        }

        let translation = match (self.config.center_on_origin, bounds) {
            (true, Some(bbox)) => {
                let center = bbox.center();
                let offset = Point::new(-center.x, -center.y);
                translate(polygons, offset);
                Some(offset)
            }
            _ => None,
        };

        let scale = match self.config.desired_width {
            Some(width) => scale_to_width(polygons, width)?,
            None => ScaleOutcome::NotRequested,
        };

        if self.config.flip_y {
            flip_y(polygons);
        }

        let report = TransformReport {
            translation,
            scale,
            flipped: self.config.flip_y,
            bounds: BoundingBox::from_polygons(polygons),
        };

        tracing::debug!(
            scale = report.scale.factor(),
            flipped = report.flipped,
            centered = report.translation.is_some(),
            "Applied geometry transform"
        );

        Ok(report)
    }
}

/// Factor that maps `bbox` onto `desired_width`
///
/// Fails when the measured width gives no finite, non-zero factor: a zero or
/// subnormal width, or a width that overflows.
fn scale_factor(bbox: &BoundingBox, desired_width: f64) -> Result<f64> {
    let width = bbox.width();
    let factor = desired_width / width;
    if bbox.is_degenerate_width() || !factor.is_finite() || factor == 0.0 {
        return Err(GeometryError::DegenerateBoundingBox { width });
    }
    Ok(factor)
}

/// Uniformly scale `polygons` so their bounding box is `desired_width` wide
///
/// An empty list is a reported no-op. A zero-width box is an error and the
/// polygons are left unmodified.
pub fn scale_to_width(polygons: &mut [Polygon], desired_width: f64) -> Result<ScaleOutcome> {
    if !desired_width.is_finite() || desired_width <= 0.0 {
        return Err(GeometryError::invalid_config(
            "desired_width",
            format!("must be a positive finite number, got {desired_width}"),
        ));
    }

    let Some(bbox) = BoundingBox::from_polygons(polygons) else {
        tracing::info!("No geometry to measure; skipping scale");
        return Ok(ScaleOutcome::SkippedEmpty);
    };
    let factor = scale_factor(&bbox, desired_width)?;
    scale(polygons, factor);
    Ok(ScaleOutcome::Scaled { factor })
}

/// Multiply every coordinate by `factor`
pub fn scale(polygons: &mut [Polygon], factor: f64) {
    for polygon in polygons {
        polygon.map_points(|p| p * factor);
    }
}

/// Add `offset` to every point
pub fn translate(polygons: &mut [Polygon], offset: Point) {
    for polygon in polygons {
        polygon.map_points(|p| p + offset);
    }
}

/// Negate every y coordinate
pub fn flip_y(polygons: &mut [Polygon]) {
    for polygon in polygons {
        polygon.map_points(|p| Point::new(p.x, -p.y));
    }
}
