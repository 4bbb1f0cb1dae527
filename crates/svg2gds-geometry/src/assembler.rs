//! Path Assembler
//!
//! Walks a path's commands in order, approximates each segment and joins the
//! resulting point runs into polygons, one per subpath.
//!
//! Point comparisons (subpath continuity, join deduplication, closure
//! detection) use a single tolerance of [`JOIN_RELATIVE_TOLERANCE`] times the
//! path's extent, the largest absolute coordinate among its control points.

use crate::approximator::{ApproximationStats, Approximator};
use crate::path::{Path, PathCommand};
use svg2gds_core::{ApproximationConfig, Point, Polygon, Result};

/// Join tolerance relative to the path extent
pub const JOIN_RELATIVE_TOLERANCE: f64 = 1e-9;

/// Polygons produced from one path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembly {
    pub polygons: Vec<Polygon>,
    pub stats: ApproximationStats,
}

/// Turns paths into polygons using one approximation policy
#[derive(Debug, Clone)]
pub struct PathAssembler {
    approximator: Approximator,
}

impl PathAssembler {
    pub fn new(config: &ApproximationConfig) -> Result<Self> {
        Ok(Self {
            approximator: Approximator::from_config(config)?,
        })
    }

    pub fn with_approximator(approximator: Approximator) -> Self {
        Self { approximator }
    }

    pub fn approximator(&self) -> &Approximator {
        &self.approximator
    }

    /// Assemble `path` into polygons
    ///
    /// Every segment is validated before any work is done. A path without
    /// segments yields no polygons.
    pub fn assemble(&self, path: &Path) -> Result<Assembly> {
        for (index, segment) in path.segments().enumerate() {
            segment.validate(index)?;
        }

        let tolerance = join_tolerance(path);
        let mut stats = ApproximationStats::default();
        let mut polygons = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        let mut previous_end: Option<Point> = None;

        for command in path.commands() {
            match command {
                PathCommand::Close => {
                    if let Some(&first) = current.first() {
                        let last = current[current.len() - 1];
                        if !last.approx_eq(first, tolerance) {
                            current.push(first);
                        }
                        finish(&mut polygons, &mut current, true, tolerance);
                    }
                    previous_end = None;
                }
                PathCommand::Segment(segment) => {
                    if let Some(end) = previous_end {
                        if !segment.start().approx_eq(end, tolerance) {
                            finish(&mut polygons, &mut current, false, tolerance);
                        }
                    }

                    let prepared = segment.prepare();
                    let points = self.approximator.approximate(&prepared, &mut stats)?;
                    append_run(&mut current, points, tolerance);
                    previous_end = Some(segment.end());
                }
            }
        }
        finish(&mut polygons, &mut current, false, tolerance);

        tracing::debug!(
            segments = stats.segments,
            polygons = polygons.len(),
            method = %self.approximator.method(),
            "Assembled path"
        );

        Ok(Assembly { polygons, stats })
    }
}

/// Tolerance used for every point comparison within `path`
pub fn join_tolerance(path: &Path) -> f64 {
    let extent = path
        .segments()
        .flat_map(|segment| segment.control_points())
        .map(|p| p.max_abs())
        .fold(0.0_f64, f64::max);
    JOIN_RELATIVE_TOLERANCE * extent.max(f64::MIN_POSITIVE)
}

/// Append a segment's points, dropping the first if it repeats the join
fn append_run(current: &mut Vec<Point>, points: Vec<Point>, tolerance: f64) {
    let skip = match (current.last(), points.first()) {
        (Some(&last), Some(&first)) => usize::from(first.approx_eq(last, tolerance)),
        _ => 0,
    };
    current.extend(points.into_iter().skip(skip));
}

/// Move the open run into `polygons` as a finished polygon
///
/// Runs whose ends coincide within tolerance are treated as closed.
fn finish(polygons: &mut Vec<Polygon>, current: &mut Vec<Point>, closed: bool, tolerance: f64) {
    let points = std::mem::take(current);
    let ends_meet = points.len() > 1 && points[0].approx_eq(points[points.len() - 1], tolerance);
    if let Some(polygon) = Polygon::new(points, closed || ends_meet) {
        polygons.push(polygon);
    }
}
