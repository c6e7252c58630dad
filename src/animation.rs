//! Animatable state of parametric shapes
//!
//! Shapes expose their continuously variable parameters as a flat vector of
//! scalars with a fixed field order. Interpolation is driven entirely by the
//! caller, shapes never track time.
use crate::{
    Scalar, ShapeError,
    utils::{clamp, lerp},
};

/// Flat vector of animatable parameters
pub type AnimatableVector = Vec<Scalar>;

/// Shape with parameters that can be interpolated
pub trait Animatable {
    /// Number of scalars in the animatable vector
    const SIZE: usize;

    /// Current animatable parameters in a fixed field order
    fn to_vector(&self) -> AnimatableVector;

    /// Overwrite animatable parameters from the vector
    ///
    /// Fails with `RangeViolation` if the vector length does not match `SIZE`,
    /// in which case the shape is left untouched.
    fn set_vector(&mut self, vector: &[Scalar]) -> Result<(), ShapeError>;

    /// Copy of the shape with parameters taken from the vector
    fn with_vector(&self, vector: &[Scalar]) -> Result<Self, ShapeError>
    where
        Self: Clone,
    {
        let mut shape = self.clone();
        shape.set_vector(vector)?;
        Ok(shape)
    }
}

/// Validate vector length and return it as a fixed size array
pub(crate) fn fixed_vector<const N: usize>(
    shape: &str,
    vector: &[Scalar],
) -> Result<[Scalar; N], ShapeError> {
    vector.try_into().map_err(|_| {
        ShapeError::range(format!(
            "{} expects animatable vector of size {}, got {}",
            shape,
            N,
            vector.len()
        ))
    })
}

/// Component-wise interpolation `a[i] + (b[i] - a[i]) * t` of two vectors
///
/// Progress `t` is clamped to `[0, 1]`.
pub fn interpolate_vector(
    from: &[Scalar],
    to: &[Scalar],
    t: Scalar,
) -> Result<AnimatableVector, ShapeError> {
    if from.len() != to.len() {
        return Err(ShapeError::range(format!(
            "animatable vectors differ in size: {} != {}",
            from.len(),
            to.len()
        )));
    }
    let t = clamp(t, 0.0, 1.0);
    Ok(from
        .iter()
        .zip(to)
        .map(|(a, b)| lerp(*a, *b, t))
        .collect())
}

/// Intermediate shape at progress `t` between `from` and `to`
///
/// Non animatable parameters are taken from `from`.
pub fn interpolate<S>(from: &S, to: &S, t: Scalar) -> Result<S, ShapeError>
where
    S: Animatable + Clone,
{
    let vector = interpolate_vector(&from.to_vector(), &to.to_vector(), t)?;
    from.with_vector(&vector)
}
