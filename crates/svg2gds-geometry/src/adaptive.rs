//! Adaptive chord-error refinement
//!
//! Recursively halves the parameter interval until the curve midpoint lies
//! within `max_error` of the chord. Recursion carries an explicit depth
//! counter; at [`MAX_REFINE_DEPTH`] the chord is accepted whatever its error
//! and the event is counted instead of failing.

use crate::segment::Curve;
use svg2gds_core::config::validate_max_error;
use svg2gds_core::{Point, Result};

/// Deepest subdivision level before a chord is accepted unconditionally
pub const MAX_REFINE_DEPTH: u32 = 20;

/// Points produced for one curve plus refinement diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct Refinement {
    pub points: Vec<Point>,
    /// Intervals accepted only because the depth cap was reached
    pub depth_limited: usize,
}

/// Chord-error-bounded subdivision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveRefiner {
    max_error: f64,
    max_depth: u32,
}

impl AdaptiveRefiner {
    pub fn new(max_error: f64) -> Result<Self> {
        validate_max_error(max_error)?;
        Ok(Self {
            max_error,
            max_depth: MAX_REFINE_DEPTH,
        })
    }

    /// Override the depth cap
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Approximate a whole curve
    ///
    /// The result always starts with the curve's exact start point and ends
    /// with its exact end point.
    pub fn approximate<C: Curve + ?Sized>(&self, curve: &C) -> Refinement {
        let start = curve.start_point();
        let end = curve.end_point();

        let mut points = Vec::new();
        let mut depth_limited = 0;
        self.refine_interval(curve, (0.0, start), (1.0, end), 0, &mut points, &mut depth_limited);
        points.push(end);

        if depth_limited > 0 {
            tracing::warn!(
                depth_limited,
                max_depth = self.max_depth,
                max_error = self.max_error,
                "Adaptive refinement hit the depth cap; accepted chords above the error bound"
            );
        }

        Refinement {
            points,
            depth_limited,
        }
    }

    /// Refine `[t0, t1]` given its evaluated endpoints
    ///
    /// Emits the `t0` point of every accepted chord in parameter order. The
    /// `t1` point of the interval is left for the caller to emit.
    pub fn refine_interval<C: Curve + ?Sized>(
        &self,
        curve: &C,
        (t0, p0): (f64, Point),
        (t1, p1): (f64, Point),
        depth: u32,
        out: &mut Vec<Point>,
        depth_limited: &mut usize,
    ) {
        let tm = 0.5 * (t0 + t1);
        let pm = curve.point_at(tm);

        if pm.distance_to_segment(p0, p1) <= self.max_error {
            out.push(p0);
            return;
        }

        if depth >= self.max_depth {
            tracing::debug!(t0, t1, depth, "Depth cap reached, accepting chord");
            *depth_limited += 1;
            out.push(p0);
            return;
        }

        self.refine_interval(curve, (t0, p0), (tm, pm), depth + 1, out, depth_limited);
        self.refine_interval(curve, (tm, pm), (t1, p1), depth + 1, out, depth_limited);
    }
}
