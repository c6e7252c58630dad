//! Curve segments used by the path: cubic bezier and circular arc
use crate::{Angle, PI, Point, Scalar, Transform};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cubic bezier curve
#[derive(Clone, Copy, PartialEq)]
pub struct Cubic(pub [Point; 4]);

impl fmt::Debug for Cubic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Cubic([p0, p1, p2, p3]) = self;
        write!(f, "Cubic {:?} {:?} {:?} {:?}", p0, p1, p2, p3)
    }
}

impl Cubic {
    pub fn new(
        p0: impl Into<Point>,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
    ) -> Self {
        Self([p0.into(), p1.into(), p2.into(), p3.into()])
    }

    pub fn start(&self) -> Point {
        self.0[0]
    }

    pub fn end(&self) -> Point {
        self.0[3]
    }

    /// Evaluate curve at parameter value `t` in (0.0..=1.0)
    pub fn at(&self, t: Scalar) -> Point {
        let Self([p0, p1, p2, p3]) = *self;
        let u = 1.0 - t;
        (u * u * u) * p0 + (3.0 * u * u * t) * p1 + (3.0 * u * t * t) * p2 + (t * t * t) * p3
    }

    pub fn transform(&self, tr: Transform) -> Self {
        let Self([p0, p1, p2, p3]) = self;
        Self([tr.apply(*p0), tr.apply(*p1), tr.apply(*p2), tr.apply(*p3)])
    }
}

/// Circular arc in raw mathematical convention
///
/// Angle 0 points along positive x-axis and grows towards positive y-axis,
/// `clockwise` arcs sweep towards decreasing angles.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CircularArc {
    pub center: Point,
    pub radius: Scalar,
    pub start: Angle,
    pub end: Angle,
    pub clockwise: bool,
}

impl fmt::Debug for CircularArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arc center:{:?} radius:{:.3?} start:{:?} end:{:?} clockwise:{}",
            self.center, self.radius, self.start, self.end, self.clockwise
        )
    }
}

impl CircularArc {
    pub fn new(
        center: impl Into<Point>,
        radius: Scalar,
        start: Angle,
        end: Angle,
        clockwise: bool,
    ) -> Self {
        Self {
            center: center.into(),
            radius,
            start,
            end,
            clockwise,
        }
    }

    /// Signed angular size of the arc in radians, within `[-2PI, 2PI]`
    pub fn sweep(&self) -> Scalar {
        let tau = 2.0 * PI;
        let (delta, sign) = if self.clockwise {
            ((self.start - self.end).to_radians(), -1.0)
        } else {
            ((self.end - self.start).to_radians(), 1.0)
        };
        if delta >= tau {
            sign * tau
        } else {
            sign * delta.rem_euclid(tau)
        }
    }

    /// Point on the arc at parameter `t` in (0.0..=1.0)
    pub fn at(&self, t: Scalar) -> Point {
        let angle = self.start + Angle::radians(self.sweep() * t);
        self.center + self.radius * Point::polar(angle)
    }

    pub fn start_point(&self) -> Point {
        self.center + self.radius * Point::polar(self.start)
    }

    pub fn end_point(&self) -> Point {
        self.at(1.0)
    }

    /// Convert arc to an iterator over cubic segments
    pub fn to_cubics(&self) -> ArcCubicIter {
        ArcCubicIter::new(*self)
    }
}

/// Approximate arc with a sequence of cubic bezier curves
///
/// Arc is split into segments no larger than `PI / 2`, each segment from
/// `eta_1` to `eta_2` is converted with:
///     P0 = A(eta_1)
///     P1 = P0 + alpha * A'(eta_1)
///     P2 = P3 - alpha * A'(eta_2)
///     P3 = A(eta_2)
/// where
///     alpha = 4 / 3 * tan((eta_2 - eta_1) / 4)
pub struct ArcCubicIter {
    arc: CircularArc,
    segment_delta: Scalar,
    segment_index: usize,
    segment_count: usize,
}

impl ArcCubicIter {
    fn new(arc: CircularArc) -> Self {
        let sweep = arc.sweep();
        let segment_count = if sweep.abs() < 1e-12 || !arc.radius.is_finite() {
            0
        } else {
            // tolerance keeps an exact quarter turn in a single segment
            (sweep.abs() / (PI / 2.0) - 1e-9).ceil() as usize
        };
        let segment_delta = if segment_count == 0 {
            0.0
        } else {
            sweep / segment_count as Scalar
        };
        Self {
            arc,
            segment_delta,
            segment_index: 0,
            segment_count,
        }
    }

    fn at(&self, eta: Scalar) -> (Point, Point) {
        let (sin, cos) = eta.sin_cos();
        let radius = self.arc.radius;
        let at = self.arc.center + Point::new(radius * cos, radius * sin);
        let at_deriv = Point::new(-radius * sin, radius * cos);
        (at, at_deriv)
    }
}

impl Iterator for ArcCubicIter {
    type Item = Cubic;

    fn next(&mut self) -> Option<Self::Item> {
        if self.segment_index >= self.segment_count {
            return None;
        }
        let eta_1 = self.arc.start.to_radians() + self.segment_delta * self.segment_index as Scalar;
        let eta_2 = eta_1 + self.segment_delta;
        self.segment_index += 1;

        let alpha = 4.0 / 3.0 * ((eta_2 - eta_1) / 4.0).tan();
        let (p0, d0) = self.at(eta_1);
        let (p3, d3) = self.at(eta_2);
        let p1 = p0 + alpha * d0;
        let p2 = p3 - alpha * d3;
        Some(Cubic([p0, p1, p2, p3]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.segment_count - self.segment_index;
        (size, Some(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_arc_sweep() {
        let center = Point::new(0.0, 0.0);
        let arc = CircularArc::new(center, 1.0, Angle::degrees(-90.0), Angle::degrees(0.0), false);
        assert_approx_eq!(arc.sweep(), PI / 2.0, 1e-12);

        let arc = CircularArc::new(center, 1.0, Angle::degrees(-90.0), Angle::degrees(0.0), true);
        assert_approx_eq!(arc.sweep(), -3.0 * PI / 2.0, 1e-12);

        let arc = CircularArc::new(center, 1.0, Angle::ZERO, Angle::radians(2.0 * PI), false);
        assert_approx_eq!(arc.sweep(), 2.0 * PI, 1e-12);

        let arc = CircularArc::new(center, 1.0, Angle::ZERO, Angle::ZERO, true);
        assert_approx_eq!(arc.sweep(), 0.0);
        assert_eq!(arc.to_cubics().count(), 0);
    }

    #[test]
    fn test_arc_points() {
        let arc = CircularArc::new((150.0, 150.0), 150.0, Angle::degrees(-90.0), Angle::ZERO, false);
        assert!(arc.start_point().is_close_to(Point::new(150.0, 0.0)));
        assert!(arc.end_point().is_close_to(Point::new(300.0, 150.0)));
        let mid = arc.at(0.5);
        assert_approx_eq!(mid.dist(arc.center), 150.0, 1e-9);
    }

    #[test]
    fn test_arc_to_cubics() {
        let arc = CircularArc::new((0.0, 0.0), 10.0, Angle::ZERO, Angle::degrees(270.0), false);
        let cubics: Vec<_> = arc.to_cubics().collect();
        assert_eq!(cubics.len(), 3);
        assert!(cubics[0].start().is_close_to(arc.start_point()));
        assert!(cubics[2].end().is_close_to(arc.end_point()));
        for pair in cubics.windows(2) {
            assert!(pair[0].end().is_close_to(pair[1].start()));
        }
        // approximation stays close to the circle
        for cubic in cubics.iter() {
            for index in 0..=10 {
                let point = cubic.at(index as Scalar / 10.0);
                assert_approx_eq!(point.length(), 10.0, 3e-3);
            }
        }
    }

    #[test]
    fn test_quarter_arc_matches_ellipse() {
        let arc = CircularArc::new((0.0, 0.0), 1.0, Angle::ZERO, Angle::radians(PI / 2.0), false);
        let cubics: Vec<_> = arc.to_cubics().collect();
        assert_eq!(cubics.len(), 1);
        let Cubic([p0, p1, p2, p3]) = cubics[0];
        let kappa = 0.5522847498307935;
        assert_approx_eq!(p1.dist(p0), kappa, 1e-12);
        assert_approx_eq!(p2.dist(p3), kappa, 1e-12);
        assert!(p1.is_close_to(Point::new(1.0, kappa)));

        // clockwise arcs bend the same way
        let arc = CircularArc::new((0.0, 0.0), 1.0, Angle::radians(PI / 2.0), Angle::ZERO, true);
        let Cubic([_, p1, _, _]) = arc.to_cubics().next().unwrap();
        assert!(p1.is_close_to(Point::new(kappa, 1.0)));
    }

    #[test]
    fn test_cubic_transform() {
        let cubic = Cubic::new((0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0));
        let moved = cubic.transform(Transform::new_translate(1.0, 1.0));
        assert!(moved.start().is_close_to(Point::new(1.0, 1.0)));
        assert!(moved.at(0.5).is_close_to(cubic.at(0.5) + Point::new(1.0, 1.0)));
    }
}
