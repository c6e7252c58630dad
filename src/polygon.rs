//! Straight line silhouettes
//!
//! Closed silhouettes repeat their first point as the final `line_to` instead
//! of relying on `close`, so that round line joins render correctly at the
//! starting vertex.
use crate::{
    animation::{fixed_vector, Animatable},
    shape::ensure_finite,
    InsettableShape, Path, Point, Rect, Scalar, Shape, ShapeError,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Build open polyline through all the points, repeating the first one at the end
fn closed_polyline(points: &[Point]) -> Result<Path, ShapeError> {
    let mut builder = Path::builder();
    if let Some((first, rest)) = points.split_first() {
        builder.move_to(*first);
        for point in rest.iter().chain(Some(first)) {
            builder.line_to(*point)?;
        }
    }
    Ok(builder.build())
}

fn ensure_rect(shape: &str, rect: Rect) -> Result<(), ShapeError> {
    if rect.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::degenerate(format!(
            "{} received non-finite rectangle {:?}",
            shape, rect
        )))
    }
}

/// Triangle pointing up: top middle, bottom left, bottom right
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle;

impl Shape for Triangle {
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        ensure_rect("triangle", rect)?;
        closed_polyline(&[
            Point::new(rect.mid_x(), rect.min_y()),
            Point::new(rect.min_x(), rect.max_y()),
            Point::new(rect.max_x(), rect.max_y()),
        ])
    }
}

/// Trapezoid with its top edge inset horizontally by `inset_amount`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Trapezoid {
    pub inset_amount: Scalar,
}

impl Trapezoid {
    pub fn new(inset_amount: Scalar) -> Self {
        Self { inset_amount }
    }
}

impl Default for Trapezoid {
    fn default() -> Self {
        Self::new(50.0)
    }
}

impl Shape for Trapezoid {
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        ensure_rect("trapezoid", rect)?;
        ensure_finite("trapezoid", &[self.inset_amount])?;
        let inset = self.inset_amount;
        closed_polyline(&[
            Point::new(rect.min_x(), rect.max_y()),
            Point::new(rect.min_x() + inset, rect.min_y()),
            Point::new(rect.max_x() - inset, rect.min_y()),
            Point::new(rect.max_x(), rect.max_y()),
        ])
    }
}

impl Animatable for Trapezoid {
    const SIZE: usize = 1;

    fn to_vector(&self) -> Vec<Scalar> {
        vec![self.inset_amount]
    }

    fn set_vector(&mut self, vector: &[Scalar]) -> Result<(), ShapeError> {
        let [inset_amount] = fixed_vector("trapezoid", vector)?;
        self.inset_amount = inset_amount;
        Ok(())
    }
}

/// Arrow pointing up
///
/// Head occupies the top half of the rectangle and spans its full width, shaft
/// is an eighth of the width wide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arrow;

impl Shape for Arrow {
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        ensure_rect("arrow", rect)?;
        let shaft = rect.width() / 4.0 / 2.0;
        let head_base = rect.mid_y();
        let left = rect.mid_x() - shaft / 2.0;
        let right = rect.mid_x() + shaft / 2.0;
        closed_polyline(&[
            Point::new(rect.mid_x(), rect.min_y()),
            Point::new(rect.max_x(), head_base),
            Point::new(right, head_base),
            Point::new(right, rect.max_y()),
            Point::new(left, rect.max_y()),
            Point::new(left, head_base),
            Point::new(rect.min_x(), head_base),
        ])
    }
}

/// Rectangle filling the whole drawing area, shrunk by `inset_amount`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rectangle {
    pub inset_amount: Scalar,
}

impl Shape for Rectangle {
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        ensure_rect("rectangle", rect)?;
        ensure_finite("rectangle", &[self.inset_amount])?;
        Ok(Path::builder().rect(rect.inset(self.inset_amount)).build())
    }
}

impl InsettableShape for Rectangle {
    fn inset(&self, amount: Scalar) -> Self {
        Self {
            inset_amount: self.inset_amount + amount,
        }
    }
}
