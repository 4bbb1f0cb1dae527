//! Flattened path documents
//!
//! A [`Path`] is an ordered list of [`PathCommand`]s in absolute coordinates.
//! Subpaths are not stored explicitly: they start wherever a segment does not
//! continue from the previous one, or after an explicit close.

use crate::arc::ArcSegment;
use crate::segment::Segment;
use serde::{Deserialize, Serialize};
use svg2gds_core::Point;

/// One step of a path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathCommand {
    Segment(Segment),
    /// Close the current subpath back to its first point
    Close,
}

/// An ordered sequence of segments and closes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> PathBuilder {
        PathBuilder::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.commands.push(PathCommand::Segment(segment));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Segments in path order, skipping closes
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            PathCommand::Segment(segment) => Some(segment),
            PathCommand::Close => None,
        })
    }

    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Convert a lyon path into path commands
    ///
    /// Lyon stores coordinates as `f32`; they are widened losslessly.
    pub fn from_lyon(path: &lyon::path::Path) -> Self {
        use lyon::path::Event;

        fn pt(p: lyon::math::Point) -> Point {
            Point::new(f64::from(p.x), f64::from(p.y))
        }

        let mut result = Path::new();
        for event in path.iter() {
            match event {
                Event::Begin { .. } => {}
                Event::Line { from, to } => result.push(Segment::line(pt(from), pt(to))),
                Event::Quadratic { from, ctrl, to } => {
                    result.push(Segment::quadratic(pt(from), pt(ctrl), pt(to)))
                }
                Event::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                } => result.push(Segment::cubic(pt(from), pt(ctrl1), pt(ctrl2), pt(to))),
                Event::End { close, .. } => {
                    if close {
                        result.close();
                    }
                }
            }
        }
        result
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self {
            commands: segments.into_iter().map(PathCommand::Segment).collect(),
        }
    }
}

/// Builds a [`Path`] from pen-style drawing commands
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    path: Path,
    current: Point,
    subpath_start: Point,
}

impl PathBuilder {
    pub fn move_to(mut self, to: Point) -> Self {
        self.current = to;
        self.subpath_start = to;
        self
    }

    pub fn line_to(mut self, to: Point) -> Self {
        self.path.push(Segment::line(self.current, to));
        self.current = to;
        self
    }

    pub fn quadratic_to(mut self, control: Point, to: Point) -> Self {
        self.path.push(Segment::quadratic(self.current, control, to));
        self.current = to;
        self
    }

    pub fn cubic_to(mut self, control1: Point, control2: Point, to: Point) -> Self {
        self.path.push(Segment::cubic(self.current, control1, control2, to));
        self.current = to;
        self
    }

    pub fn arc_to(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    ) -> Self {
        self.path.push(Segment::Arc(ArcSegment {
            start: self.current,
            end: to,
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
        }));
        self.current = to;
        self
    }

    pub fn close(mut self) -> Self {
        self.path.close();
        self.current = self.subpath_start;
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

/// Input document: every path produced by the upstream flattening stage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathDocument {
    pub paths: Vec<Path>,
}

impl PathDocument {
    pub fn segment_count(&self) -> usize {
        self.paths.iter().map(Path::segment_count).sum()
    }
}
