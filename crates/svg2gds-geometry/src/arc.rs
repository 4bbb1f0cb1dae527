//! Elliptical arcs
//!
//! Arcs arrive in SVG endpoint parameterization. Evaluation needs the centre
//! form, which is computed once per segment by
//! [`ArcSegment::center_parameterization`] and then reused for every
//! parameter value.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use svg2gds_core::Point;

/// Elliptical arc in endpoint parameterization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub start: Point,
    pub end: Point,
    /// Radius along the ellipse x-axis
    pub rx: f64,
    /// Radius along the ellipse y-axis
    pub ry: f64,
    /// Rotation of the ellipse x-axis, in degrees
    #[serde(default)]
    pub rotation: f64,
    /// Choose the sweep of 180 degrees or more
    #[serde(default)]
    pub large_arc: bool,
    /// Sweep in the direction of increasing angle
    #[serde(default)]
    pub sweep: bool,
}

/// Centre parameterization of an arc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc {
    pub center: Point,
    /// Radii after out-of-range correction
    pub rx: f64,
    pub ry: f64,
    /// Angle of the start point on the unrotated ellipse
    pub start_angle: f64,
    /// Signed sweep from start to end
    pub delta_angle: f64,
    sin_phi: f64,
    cos_phi: f64,
}

impl CenterArc {
    /// Point at parameter `t`, interpolating the angle linearly
    pub fn point_at(&self, t: f64) -> Point {
        let theta = self.start_angle + self.delta_angle * t;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let x = self.rx * cos_theta;
        let y = self.ry * sin_theta;
        Point::new(
            self.center.x + self.cos_phi * x - self.sin_phi * y,
            self.center.y + self.sin_phi * x + self.cos_phi * y,
        )
    }
}

/// How an arc is evaluated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcShape {
    /// A proper elliptical arc
    Elliptical(CenterArc),
    /// Zero radius or coincident endpoints: a straight line
    Line,
}

impl ArcSegment {
    /// Convert to centre parameterization
    ///
    /// Radii too small to span the endpoints are scaled up uniformly until
    /// exactly one ellipse fits. Degenerate arcs resolve to [`ArcShape::Line`].
    /// See <https://www.w3.org/TR/SVG2/implnote.html#ArcConversionEndpointToCenter>.
    pub fn center_parameterization(&self) -> ArcShape {
        let (x1, y1) = (self.start.x, self.start.y);
        let (x2, y2) = (self.end.x, self.end.y);

        if self.start == self.end {
            return ArcShape::Line;
        }

        let mut rx = self.rx.abs();
        let mut ry = self.ry.abs();
        if rx == 0.0 || ry == 0.0 {
            return ArcShape::Line;
        }

        let phi = self.rotation.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();

        // Midpoint-relative start point in the ellipse's own axes
        let mid_x = (x1 - x2) / 2.0;
        let mid_y = (y1 - y2) / 2.0;
        let x1p = cos_phi * mid_x + sin_phi * mid_y;
        let y1p = -sin_phi * mid_x + cos_phi * mid_y;

        let lambda = (x1p / rx).powi(2) + (y1p / ry).powi(2);
        if lambda > 1.0 {
            let grow = lambda.sqrt();
            rx *= grow;
            ry *= grow;
        }

        let d = (rx * y1p).powi(2) + (ry * x1p).powi(2);
        if d == 0.0 {
            return ArcShape::Line;
        }

        let mut k = ((rx * ry).powi(2) / d - 1.0).abs().sqrt();
        if self.sweep == self.large_arc {
            k = -k;
        }
        let cxp = k * rx * y1p / ry;
        let cyp = -k * ry * x1p / rx;

        let center = Point::new(
            cos_phi * cxp - sin_phi * cyp + (x1 + x2) / 2.0,
            sin_phi * cxp + cos_phi * cyp + (y1 + y2) / 2.0,
        );

        let ux = (x1p - cxp) / rx;
        let uy = (y1p - cyp) / ry;
        let vx = (-x1p - cxp) / rx;
        let vy = (-y1p - cyp) / ry;

        let u_len = ux.hypot(uy);
        let v_len = vx.hypot(vy);
        if u_len == 0.0 || v_len == 0.0 {
            return ArcShape::Line;
        }

        let start_angle = uy.atan2(ux);

        let cos_delta = ((ux * vx + uy * vy) / (u_len * v_len)).clamp(-1.0, 1.0);
        let mut delta_angle = cos_delta.acos();
        if ux * vy - uy * vx < 0.0 {
            delta_angle = -delta_angle;
        }
        if self.sweep && delta_angle < 0.0 {
            delta_angle += 2.0 * PI;
        } else if !self.sweep && delta_angle > 0.0 {
            delta_angle -= 2.0 * PI;
        }

        ArcShape::Elliptical(CenterArc {
            center,
            rx,
            ry,
            start_angle,
            delta_angle,
            sin_phi,
            cos_phi,
        })
    }
}
