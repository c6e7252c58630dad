use crate::{Path, Rect, Scalar};
use std::fmt;

/// Error produced while building a path or generating a shape
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Drawing command that requires current point was issued before `move_to`
    PathState { command: &'static str },
    /// Geometry can not be computed (zero divisor, non-finite parameter, ...)
    DegenerateGeometry { reason: String },
    /// Parameter is outside of its supported domain
    RangeViolation { reason: String },
}

impl ShapeError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    pub(crate) fn range(reason: impl Into<String>) -> Self {
        Self::RangeViolation {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathState { command } => {
                write!(f, "`{}` requires current point, call `move_to` first", command)
            }
            Self::DegenerateGeometry { reason } => write!(f, "degenerate geometry: {}", reason),
            Self::RangeViolation { reason } => write!(f, "range violation: {}", reason),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Fail with `DegenerateGeometry` if any of the parameters is NaN or infinite
pub(crate) fn ensure_finite(shape: &str, values: &[Scalar]) -> Result<(), ShapeError> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ShapeError::degenerate(format!(
            "{} received non-finite parameter: {:?}",
            shape, values
        )))
    }
}

/// Parametric shape which can be converted to a path inside of a rectangle
pub trait Shape {
    /// Generate path of the shape fitted into `rect`
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError>;

    /// Generate path of the shape fitted into `rect`
    ///
    /// Errors are logged and degrade to an empty path, there is nothing sane a
    /// drawing surface can do with a failure.
    fn path(&self, rect: Rect) -> Path {
        match self.try_path(rect) {
            Ok(path) => path,
            Err(error) => {
                tracing::warn!(%error, ?rect, "[shape] rendering empty path");
                Path::empty()
            }
        }
    }
}

/// Shape which can be shrunk inwards
pub trait InsettableShape: Shape + Sized {
    /// Create new shape inset by `amount`, accumulated with any previous inset
    fn inset(&self, amount: Scalar) -> Self;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        (**self).try_path(rect)
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        (**self).try_path(rect)
    }
}
