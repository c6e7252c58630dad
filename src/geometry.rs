use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

pub type Scalar = f64;
pub const EPSILON: f64 = f64::EPSILON;
pub const PI: f64 = std::f64::consts::PI;

/// Format floats in a compact way suitable for debug output and SVG path
pub fn scalar_fmt(f: &mut fmt::Formatter<'_>, value: Scalar) -> fmt::Result {
    let value_abs = value.abs();
    if value_abs.fract() < EPSILON {
        write!(f, "{}", value.trunc() as i64)
    } else if value_abs > 9999.0 || value_abs <= 0.0001 {
        write!(f, "{:.3e}", value)
    } else {
        let ten: Scalar = 10.0;
        let round = ten.powi(6 - (value_abs.trunc() + 1.0).log10().ceil() as i32);
        write!(f, "{}", (value * round).round() / round)
    }
}

/// Value representing a 2D point or vector.
#[derive(Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Point(pub [Scalar; 2]);

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Point([x, y]) = self;
        scalar_fmt(f, *x)?;
        write!(f, ",")?;
        scalar_fmt(f, *y)?;
        Ok(())
    }
}

impl Point {
    #[inline]
    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self([x, y])
    }

    /// Get `x` component of the point
    #[inline]
    pub fn x(self) -> Scalar {
        self.0[0]
    }

    /// Get `y` component of the point
    #[inline]
    pub fn y(self) -> Scalar {
        self.0[1]
    }

    /// Unit vector pointing in the direction of the angle (raw convention, 0 = +X)
    pub fn polar(angle: Angle) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Self([cos, sin])
    }

    /// Get length of the vector (distance from the origin)
    pub fn length(self) -> Scalar {
        let Self([x, y]) = self;
        x.hypot(y)
    }

    /// Distance between two points
    pub fn dist(self, other: Self) -> Scalar {
        (self - other).length()
    }

    /// Both coordinates are neither NaN nor infinite
    pub fn is_finite(self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    /// Determine if self is close to the other within the margin of error
    pub fn is_close_to(self, other: Point) -> bool {
        let Self([x0, y0]) = self;
        let Self([x1, y1]) = other;
        (x0 - x1).abs() < 1e-9 && (y0 - y1).abs() < 1e-9
    }

    /// View slice of points as a flat `[x0, y0, x1, y1, ...]` slice
    pub fn as_scalars(points: &[Point]) -> &[Scalar] {
        bytemuck::cast_slice(points)
    }
}

impl From<(Scalar, Scalar)> for Point {
    #[inline]
    fn from(xy: (Scalar, Scalar)) -> Self {
        Self([xy.0, xy.1])
    }
}

impl Mul<Point> for Scalar {
    type Output = Point;

    #[inline]
    fn mul(self, other: Point) -> Self::Output {
        let Point([x, y]) = other;
        Point([self * x, self * y])
    }
}

impl Div<Scalar> for Point {
    type Output = Point;

    #[inline]
    fn div(self, rhs: Scalar) -> Self::Output {
        let Point([x, y]) = self;
        Point([x / rhs, y / rhs])
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Self::Output {
        let Point([x0, y0]) = self;
        let Point([x1, y1]) = other;
        Point([x0 + x1, y0 + y1])
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Self::Output {
        let Point([x0, y0]) = self;
        let Point([x1, y1]) = other;
        Point([x0 - x1, y0 - y1])
    }
}

/// Angle value, always stored in radians
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle(Scalar);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub fn radians(radians: Scalar) -> Self {
        Self(radians)
    }

    #[inline]
    pub fn degrees(degrees: Scalar) -> Self {
        Self(degrees.to_radians())
    }

    #[inline]
    pub fn to_radians(self) -> Scalar {
        self.0
    }

    #[inline]
    pub fn to_degrees(self) -> Scalar {
        self.0.to_degrees()
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        scalar_fmt(f, self.to_degrees())?;
        write!(f, "deg")
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, other: Angle) -> Self::Output {
        Angle(self.0 + other.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, other: Angle) -> Self::Output {
        Angle(self.0 - other.0)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

impl Mul<Scalar> for Angle {
    type Output = Angle;

    fn mul(self, scale: Scalar) -> Self::Output {
        Angle(self.0 * scale)
    }
}

/// 2D affine transformation
///
/// Stored as an array [m00, m01, m02, m10, m11, m12] but semantically corresponds to
/// a matrix:
/// ┌             ┐
/// │ m00 m01 m02 │
/// │ m10 m11 m12 │
/// │   0   0   1 │
/// └             ┘
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform([Scalar; 6]);

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
    }

    pub fn new_translate(tx: Scalar, ty: Scalar) -> Self {
        Self([1.0, 0.0, tx, 0.0, 1.0, ty])
    }

    pub fn new_scale(sx: Scalar, sy: Scalar) -> Self {
        Self([sx, 0.0, 0.0, 0.0, sy, 0.0])
    }

    pub fn new_rotate(angle: Angle) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Self([cos, -sin, 0.0, sin, cos, 0.0])
    }

    /// Apply this transformation to a point
    pub fn apply(&self, point: Point) -> Point {
        let Self([m00, m01, m02, m10, m11, m12]) = self;
        let Point([x, y]) = point;
        Point([x * m00 + y * m01 + m02, x * m10 + y * m11 + m12])
    }

    /// Find the inverse transformation
    pub fn invert(&self) -> Option<Self> {
        // inv([[M, v], [0, 1]]) = [[inv(M), - inv(M) * v], [0, 1]]
        let Self([m00, m01, m02, m10, m11, m12]) = self;
        let det = m00 * m11 - m10 * m01;
        if det.abs() <= EPSILON {
            return None;
        }
        let o00 = m11 / det;
        let o01 = -m01 / det;
        let o10 = -m10 / det;
        let o11 = m00 / det;
        let o02 = -o00 * m02 - o01 * m12;
        let o12 = -o10 * m02 - o11 * m12;
        Some(Self([o00, o01, o02, o10, o11, o12]))
    }

    /// Apply translation by `[tx, ty]` before self
    pub fn translate(&self, tx: Scalar, ty: Scalar) -> Self {
        self.matmul(Self::new_translate(tx, ty))
    }

    /// Apply scale transformation by `[sx, sy]` before self
    pub fn scale(&self, sx: Scalar, sy: Scalar) -> Self {
        self.matmul(Self::new_scale(sx, sy))
    }

    /// Apply rotation around the origin before self
    pub fn rotate(&self, angle: Angle) -> Self {
        self.matmul(Self::new_rotate(angle))
    }

    /// Transformation that applies self first and `other` second
    pub fn then(&self, other: Transform) -> Self {
        other.matmul(*self)
    }

    /// Multiply transformations in matrix form
    pub fn matmul(&self, other: Transform) -> Self {
        let Self([s00, s01, s02, s10, s11, s12]) = self;
        let Self([o00, o01, o02, o10, o11, o12]) = other;

        // s00, s01, s02 | o00, o01, o02
        // s10, s11, s12 | o10, o11, o12
        // 0  , 0  , 1   | 0  , 0  , 1
        Self([
            s00 * o00 + s01 * o10,
            s00 * o01 + s01 * o11,
            s00 * o02 + s01 * o12 + s02,
            s10 * o00 + s11 * o10,
            s10 * o01 + s11 * o11,
            s10 * o02 + s11 * o12 + s12,
        ])
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, other: Transform) -> Self::Output {
        self.matmul(other)
    }
}

/// Composition where `first` is applied to a point before `second`
pub fn compose(first: Transform, second: Transform) -> Transform {
    first.then(second)
}

/// Axis aligned rectangle, described by its origin and size
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    origin: Point,
    width: Scalar,
    height: Scalar,
}

impl Rect {
    pub fn new(x: Scalar, y: Scalar, width: Scalar, height: Scalar) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// Construct rectangle which includes points `p0` and `p1`
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        let Point([x0, y0]) = p0.into();
        let Point([x1, y1]) = p1.into();
        Self::new(x0.min(x1), y0.min(y1), (x1 - x0).abs(), (y1 - y0).abs())
    }

    #[inline]
    pub fn width(&self) -> Scalar {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Scalar {
        self.height
    }

    #[inline]
    pub fn min_x(&self) -> Scalar {
        self.origin.x()
    }

    #[inline]
    pub fn mid_x(&self) -> Scalar {
        self.origin.x() + self.width / 2.0
    }

    #[inline]
    pub fn max_x(&self) -> Scalar {
        self.origin.x() + self.width
    }

    #[inline]
    pub fn min_y(&self) -> Scalar {
        self.origin.y()
    }

    #[inline]
    pub fn mid_y(&self) -> Scalar {
        self.origin.y() + self.height / 2.0
    }

    #[inline]
    pub fn max_y(&self) -> Scalar {
        self.origin.y() + self.height
    }

    pub fn min(&self) -> Point {
        self.origin
    }

    pub fn mid(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    pub fn max(&self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Shrink rectangle by `amount` on every side.
    ///
    /// Size never goes negative, an over-inset rectangle collapses to its center.
    pub fn inset(&self, amount: Scalar) -> Self {
        let dx = amount.min(self.width / 2.0);
        let dy = amount.min(self.height / 2.0);
        Self::new(
            self.min_x() + dx,
            self.min_y() + dy,
            self.width - 2.0 * dx,
            self.height - 2.0 * dy,
        )
    }

    /// Smallest rectangle containing both self and the point
    pub fn extend(&self, point: Point) -> Self {
        Self::from_points(
            (self.min_x().min(point.x()), self.min_y().min(point.y())),
            (self.max_x().max(point.x()), self.max_y().max(point.y())),
        )
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect x=")?;
        scalar_fmt(f, self.min_x())?;
        write!(f, ", y=")?;
        scalar_fmt(f, self.min_y())?;
        write!(f, ", w=")?;
        scalar_fmt(f, self.width())?;
        write!(f, ", h=")?;
        scalar_fmt(f, self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_transform() {
        let tr = Transform::identity()
            .translate(1.0, 2.0)
            .rotate(Angle::radians(PI / 3.0))
            .scale(3.0, 2.0);
        let inv = tr.invert().unwrap();
        let p0 = Point::new(1.0, 1.0);
        let p1 = tr.apply(p0);
        let p2 = inv.apply(p1);
        assert_approx_eq!(p2.x(), 1.0, 1e-9);
        assert_approx_eq!(p2.y(), 1.0, 1e-9);
    }

    #[test]
    fn test_compose_order() {
        let rotate = Transform::new_rotate(Angle::degrees(90.0));
        let translate = Transform::new_translate(10.0, 20.0);
        let p = Point::new(1.0, 0.0);

        // rotate first: (1, 0) -> (0, 1) -> (10, 21)
        let p0 = compose(rotate, translate).apply(p);
        assert!(p0.is_close_to(Point::new(10.0, 21.0)), "{:?}", p0);

        // translate first: (1, 0) -> (11, 20) -> (-20, 11)
        let p1 = compose(translate, rotate).apply(p);
        assert!(p1.is_close_to(Point::new(-20.0, 11.0)), "{:?}", p1);

        // builder form applies newly added operation before self
        let p2 = Transform::identity()
            .translate(10.0, 20.0)
            .rotate(Angle::degrees(90.0))
            .apply(p);
        assert!(p2.is_close_to(p0));
    }

    #[test]
    fn test_compose_associative() {
        let a = Transform::new_rotate(Angle::degrees(30.0));
        let b = Transform::new_translate(3.0, -4.0);
        let c = Transform::new_scale(2.0, 0.5);
        let p = Point::new(7.0, 11.0);
        let p0 = compose(compose(a, b), c).apply(p);
        let p1 = compose(a, compose(b, c)).apply(p);
        assert!(p0.is_close_to(p1));
    }

    #[test]
    fn test_angle() {
        let angle = Angle::degrees(180.0);
        assert_approx_eq!(angle.to_radians(), PI, 1e-12);
        assert_approx_eq!((angle - Angle::degrees(90.0)).to_degrees(), 90.0, 1e-9);
        assert_approx_eq!((-angle).to_degrees(), -180.0, 1e-9);
        assert!(!Angle::radians(Scalar::NAN).is_finite());
    }

    #[test]
    fn test_rect() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_approx_eq!(rect.mid_x(), 60.0);
        assert_approx_eq!(rect.max_y(), 70.0);

        let inset = rect.inset(10.0);
        assert_eq!(inset, Rect::new(20.0, 30.0, 80.0, 30.0));

        let collapsed = rect.inset(40.0);
        assert_approx_eq!(collapsed.height(), 0.0);
        assert_approx_eq!(collapsed.mid_y(), rect.mid_y());

        let extended = rect.extend(Point::new(0.0, 100.0));
        assert_eq!(extended, Rect::new(0.0, 20.0, 110.0, 80.0));
    }

    #[test]
    fn test_as_scalars() {
        let points = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        assert_eq!(Point::as_scalars(&points), &[1.0, 2.0, 3.0, 4.0]);
    }
}
