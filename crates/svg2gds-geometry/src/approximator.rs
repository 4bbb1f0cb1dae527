//! Segment approximation policy dispatch

use crate::adaptive::AdaptiveRefiner;
use crate::segment::Curve;
use crate::subdivision::subdivide_fixed;
use serde::Serialize;
use svg2gds_core::config::validate_steps;
use svg2gds_core::{ApproximationConfig, ApproximationMethod, Point, Result};

/// Counters accumulated while approximating segments
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApproximationStats {
    /// Segments approximated
    pub segments: usize,
    /// Points emitted before join deduplication
    pub points: usize,
    /// Adaptive intervals accepted at the depth cap
    pub depth_limited: usize,
}

impl ApproximationStats {
    pub fn merge(&mut self, other: &ApproximationStats) {
        self.segments += other.segments;
        self.points += other.points;
        self.depth_limited += other.depth_limited;
    }
}

/// A validated approximation policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Approximator {
    Fixed { steps: u32 },
    Adaptive(AdaptiveRefiner),
}

impl Approximator {
    /// Build the policy selected by `config`, validating its active field
    pub fn from_config(config: &ApproximationConfig) -> Result<Self> {
        match config.method {
            ApproximationMethod::Fixed => {
                validate_steps(config.steps)?;
                Ok(Self::Fixed {
                    steps: config.steps,
                })
            }
            ApproximationMethod::Adaptive => {
                Ok(Self::Adaptive(AdaptiveRefiner::new(config.max_error)?))
            }
        }
    }

    pub fn method(&self) -> ApproximationMethod {
        match self {
            Self::Fixed { .. } => ApproximationMethod::Fixed,
            Self::Adaptive(_) => ApproximationMethod::Adaptive,
        }
    }

    /// Approximate one curve, recording counters in `stats`
    pub fn approximate<C: Curve + ?Sized>(
        &self,
        curve: &C,
        stats: &mut ApproximationStats,
    ) -> Result<Vec<Point>> {
        let points = match self {
            Self::Fixed { steps } => subdivide_fixed(curve, *steps)?,
            Self::Adaptive(refiner) => {
                let refinement = refiner.approximate(curve);
                stats.depth_limited += refinement.depth_limited;
                refinement.points
            }
        };

        stats.segments += 1;
        stats.points += points.len();
        Ok(points)
    }
}
