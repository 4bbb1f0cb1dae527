use super::Point;
use serde::Serialize;

/// An ordered vertex run produced from one subpath
///
/// Vertex order is traversal order along the source path. A polygon always
/// holds at least one point; the first and last point may coincide. Open
/// polygons are still emitted as closed shapes by layout exporters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    points: Vec<Point>,
    closed: bool,
}

impl Polygon {
    /// Build a polygon from its vertices, `None` if there are none
    pub fn new(points: Vec<Point>, closed: bool) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points, closed })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True for explicitly closed subpaths and for runs whose ends coincide
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }

    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Replace every vertex with `f(vertex)`, keeping order
    pub fn map_points<F>(&mut self, mut f: F)
    where
        F: FnMut(Point) -> Point,
    {
        for p in &mut self.points {
            *p = f(*p);
        }
    }
}
