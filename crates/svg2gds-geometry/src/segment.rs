//! Path segments and their exact evaluation
//!
//! A [`Segment`] is the parametric descriptor read from the path document.
//! Before any points are produced it is turned into a [`PreparedSegment`],
//! which caches per-segment work (the arc centre form) and implements
//! [`Curve`], the evaluation primitive shared by both approximation methods.

use crate::arc::{ArcSegment, ArcShape};
use serde::{Deserialize, Serialize};
use svg2gds_core::{GeometryError, Point, Result};

/// A curve that can be evaluated on `t ∈ [0, 1]`
///
/// Implementations must return exactly `start_point()` at `t = 0` and
/// exactly `end_point()` at `t = 1`.
pub trait Curve {
    fn point_at(&self, t: f64) -> Point;
    fn start_point(&self) -> Point;
    fn end_point(&self) -> Point;
}

/// One parametric path segment in absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Line {
        start: Point,
        end: Point,
    },
    Quadratic {
        start: Point,
        control: Point,
        end: Point,
    },
    Cubic {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
    Arc(ArcSegment),
}

impl Segment {
    pub fn line(start: Point, end: Point) -> Self {
        Self::Line { start, end }
    }

    pub fn quadratic(start: Point, control: Point, end: Point) -> Self {
        Self::Quadratic {
            start,
            control,
            end,
        }
    }

    pub fn cubic(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        Self::Cubic {
            start,
            control1,
            control2,
            end,
        }
    }

    pub fn start(&self) -> Point {
        match self {
            Self::Line { start, .. }
            | Self::Quadratic { start, .. }
            | Self::Cubic { start, .. } => *start,
            Self::Arc(arc) => arc.start,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Self::Line { end, .. } | Self::Quadratic { end, .. } | Self::Cubic { end, .. } => *end,
            Self::Arc(arc) => arc.end,
        }
    }

    /// Short lowercase name of the segment kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Quadratic { .. } => "quadratic",
            Self::Cubic { .. } => "cubic",
            Self::Arc(_) => "arc",
        }
    }

    /// Every point that defines the segment, endpoints included
    pub fn control_points(&self) -> Vec<Point> {
        match *self {
            Self::Line { start, end } => vec![start, end],
            Self::Quadratic {
                start,
                control,
                end,
            } => vec![start, control, end],
            Self::Cubic {
                start,
                control1,
                control2,
                end,
            } => vec![start, control1, control2, end],
            Self::Arc(arc) => vec![arc.start, arc.end],
        }
    }

    /// Reject non-finite control data; `index` identifies the segment in errors
    pub fn validate(&self, index: usize) -> Result<()> {
        let named: Vec<(&str, Point)> = match *self {
            Self::Line { start, end } => vec![("start", start), ("end", end)],
            Self::Quadratic {
                start,
                control,
                end,
            } => vec![("start", start), ("control", control), ("end", end)],
            Self::Cubic {
                start,
                control1,
                control2,
                end,
            } => vec![
                ("start", start),
                ("control1", control1),
                ("control2", control2),
                ("end", end),
            ],
            Self::Arc(arc) => {
                for (name, value) in [("rx", arc.rx), ("ry", arc.ry), ("rotation", arc.rotation)] {
                    if !value.is_finite() {
                        return Err(GeometryError::malformed_segment(
                            index,
                            format!("arc {name} is not finite ({value})"),
                        ));
                    }
                }
                vec![("start", arc.start), ("end", arc.end)]
            }
        };

        for (name, p) in named {
            if !p.is_finite() {
                return Err(GeometryError::malformed_segment(
                    index,
                    format!("{} {} is not finite ({}, {})", self.kind(), name, p.x, p.y),
                ));
            }
        }
        Ok(())
    }

    /// Prepare the segment for repeated evaluation
    pub fn prepare(&self) -> PreparedSegment {
        let arc = match self {
            Self::Arc(arc) => arc.center_parameterization(),
            _ => ArcShape::Line,
        };
        PreparedSegment { segment: *self, arc }
    }
}

/// A segment with its per-segment evaluation state computed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreparedSegment {
    segment: Segment,
    arc: ArcShape,
}

impl PreparedSegment {
    pub fn segment(&self) -> &Segment {
        &self.segment
    }
}

fn lerp(a: Point, b: Point, t: f64) -> Point {
    a + (b - a) * t
}

impl Curve for PreparedSegment {
    fn point_at(&self, t: f64) -> Point {
        if t <= 0.0 {
            return self.segment.start();
        }
        if t >= 1.0 {
            return self.segment.end();
        }

        let mt = 1.0 - t;
        match self.segment {
            Segment::Line { start, end } => lerp(start, end, t),
            Segment::Quadratic {
                start,
                control,
                end,
            } => start * (mt * mt) + control * (2.0 * mt * t) + end * (t * t),
            Segment::Cubic {
                start,
                control1,
                control2,
                end,
            } => {
                start * (mt * mt * mt)
                    + control1 * (3.0 * mt * mt * t)
                    + control2 * (3.0 * mt * t * t)
                    + end * (t * t * t)
            }
            Segment::Arc(arc) => match self.arc {
                ArcShape::Elliptical(center) => center.point_at(t),
                ArcShape::Line => lerp(arc.start, arc.end, t),
            },
        }
    }

    fn start_point(&self) -> Point {
        self.segment.start()
    }

    fn end_point(&self) -> Point {
        self.segment.end()
    }
}
