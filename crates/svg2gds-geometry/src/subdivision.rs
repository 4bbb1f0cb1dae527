//! Fixed subdivision
//!
//! Samples a curve at `steps + 1` uniformly spaced parameters. There is no
//! error control: the caller accepts whatever faceting the step count gives.

use crate::segment::Curve;
use svg2gds_core::config::validate_steps;
use svg2gds_core::{Point, Result};

/// Evaluate `curve` at `t = i / steps` for `i = 0..=steps`
pub fn subdivide_fixed<C: Curve + ?Sized>(curve: &C, steps: u32) -> Result<Vec<Point>> {
    validate_steps(steps)?;

    let n = steps as usize;
    let mut points = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let t = i as f64 / n as f64;
        points.push(curve.point_at(t));
    }
    Ok(points)
}
