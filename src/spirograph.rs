//! Hypotrochoid curve, traced by a point attached to a circle rolling inside another circle
use crate::{
    PI, Path, Point, Rect, Scalar, Shape, ShapeError,
    animation::{Animatable, fixed_vector},
    shape::ensure_finite,
    utils::gcd,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Angular step between consecutive points of the curve
pub const THETA_STEP: Scalar = 0.01;

/// Bounds on the amount of work a single spirograph may request
///
/// Coprime radii produce very long curves, the limits turn such requests into
/// an error instead of an unbounded loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpirographLimits {
    /// Maximum absolute value of either radius
    pub max_radius: i64,
    /// Maximum number of points in the curve
    pub max_steps: usize,
}

impl Default for SpirographLimits {
    fn default() -> Self {
        Self {
            max_radius: 200,
            max_steps: 200_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spirograph {
    pub inner_radius: i64,
    pub outer_radius: i64,
    /// Distance of the pen from the center of the rolling circle
    pub distance: Scalar,
    /// Fraction of the curve to draw in `[0, 1]`
    pub amount: Scalar,
    #[cfg_attr(feature = "serde", serde(default))]
    pub limits: SpirographLimits,
}

impl Default for Spirograph {
    fn default() -> Self {
        Self::new(125, 75, 25.0, 1.0)
    }
}

impl Spirograph {
    pub fn new(inner_radius: i64, outer_radius: i64, distance: Scalar, amount: Scalar) -> Self {
        Self {
            inner_radius,
            outer_radius,
            distance,
            amount,
            limits: SpirographLimits::default(),
        }
    }

    pub fn with_limits(self, limits: SpirographLimits) -> Self {
        Self { limits, ..self }
    }

    /// Largest angle of the curve, `ceil(2PI * outer / gcd(inner, outer)) * amount`
    pub fn end_theta(&self) -> Result<Scalar, ShapeError> {
        let divisor = gcd(self.inner_radius, self.outer_radius);
        if divisor == 0 {
            return Err(ShapeError::degenerate(
                "spirograph radii are both zero, divisor is undefined",
            ));
        }
        let turns = (2.0 * PI * self.outer_radius as Scalar / divisor as Scalar).ceil();
        Ok(turns * self.amount)
    }

    /// Number of points `theta = 0, 0.01, ..` not exceeding `end_theta`
    ///
    /// Counted in floating point, so the caller can check it against the
    /// limits before converting to an integer.
    fn steps(end_theta: Scalar) -> Scalar {
        if end_theta < 0.0 {
            0.0
        } else {
            // tolerance keeps `end_theta` itself when it is a multiple of the step
            (end_theta / THETA_STEP + 1e-9).floor() + 1.0
        }
    }

    fn validate(&self) -> Result<(), ShapeError> {
        ensure_finite("spirograph", &[self.distance, self.amount])?;
        if !(0.0..=1.0).contains(&self.amount) {
            return Err(ShapeError::range(format!(
                "spirograph amount {} is outside of [0, 1]",
                self.amount
            )));
        }
        let max_radius = self.limits.max_radius.unsigned_abs();
        if self.inner_radius.unsigned_abs() > max_radius
            || self.outer_radius.unsigned_abs() > max_radius
        {
            return Err(ShapeError::range(format!(
                "spirograph radii {} and {} exceed limit {}",
                self.inner_radius, self.outer_radius, max_radius
            )));
        }
        if self.outer_radius == 0 {
            return Err(ShapeError::degenerate("spirograph outer radius is zero"));
        }
        Ok(())
    }
}

impl Shape for Spirograph {
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        let _span = tracing::debug_span!(
            "[spirograph]",
            inner = self.inner_radius,
            outer = self.outer_radius
        )
        .entered();
        self.validate()?;
        let end_theta = self.end_theta()?;
        let steps = Self::steps(end_theta);
        if steps > self.limits.max_steps as Scalar {
            return Err(ShapeError::range(format!(
                "spirograph requires {} steps, limit is {}",
                steps, self.limits.max_steps
            )));
        }
        let steps = steps as usize;
        tracing::debug!(end_theta, steps, "[spirograph:steps]");

        let difference = self.inner_radius as Scalar - self.outer_radius as Scalar;
        let ratio = difference / self.outer_radius as Scalar;
        let offset = Point::new(rect.width() / 2.0, rect.height() / 2.0);
        let mut builder = Path::builder();
        for step in 0..steps {
            let theta = step as Scalar * THETA_STEP;
            let x = difference * theta.cos() + self.distance * (ratio * theta).cos();
            let y = difference * theta.sin() - self.distance * (ratio * theta).sin();
            let point = Point::new(x, y) + offset;
            if step == 0 {
                builder.move_to(point);
            } else {
                builder.line_to(point)?;
            }
        }
        Ok(builder.build())
    }
}

impl Animatable for Spirograph {
    const SIZE: usize = 2;

    /// Radii are integers and are not animated
    fn to_vector(&self) -> Vec<Scalar> {
        vec![self.distance, self.amount]
    }

    fn set_vector(&mut self, vector: &[Scalar]) -> Result<(), ShapeError> {
        let [distance, amount] = fixed_vector("spirograph", vector)?;
        self.distance = distance;
        self.amount = amount;
        Ok(())
    }
}
