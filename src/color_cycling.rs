//! Concentric rings with hues shifted by a cycling phase
//!
//! Each ring is the base shape inset by its index and carries a pair of colors
//! (full and half brightness) for the renderer to build a gradient border from.
use crate::{
    Circle, Hsb, InsettableShape, Path, Rect, Rectangle, Scalar, Shape, ShapeError,
    animation::{Animatable, fixed_vector},
    shape::ensure_finite,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of rings
pub const DEFAULT_STEPS: i64 = 100;

/// Largest number of rings a color cycling shape may request
pub const MAX_RINGS: usize = 10_000;

/// Single ring of the color cycling shape
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub index: usize,
    /// Inset of the base shape
    pub inset: Scalar,
    pub path: Path,
    /// Full brightness color
    pub start: Hsb,
    /// Half brightness color
    pub end: Hsb,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorCycling<S> {
    #[cfg_attr(feature = "serde", serde(default))]
    pub shape: S,
    /// Hue phase offset in `[0, 1]`
    #[cfg_attr(feature = "serde", serde(default))]
    pub amount: Scalar,
    /// Number of rings, negative values are treated as zero
    #[cfg_attr(feature = "serde", serde(default = "default_steps"))]
    pub steps: i64,
}

#[cfg(feature = "serde")]
fn default_steps() -> i64 {
    DEFAULT_STEPS
}

pub type ColorCyclingCircle = ColorCycling<Circle>;
pub type ColorCyclingRectangle = ColorCycling<Rectangle>;

impl<S: Default> Default for ColorCycling<S> {
    fn default() -> Self {
        Self::new(S::default(), 0.0)
    }
}

impl<S> ColorCycling<S> {
    pub fn new(shape: S, amount: Scalar) -> Self {
        Self {
            shape,
            amount,
            steps: DEFAULT_STEPS,
        }
    }

    pub fn with_steps(self, steps: i64) -> Self {
        Self { steps, ..self }
    }

    /// Number of rings after clamping
    pub fn ring_count(&self) -> usize {
        usize::try_from(self.steps).unwrap_or(0)
    }

    /// Hue of the ring, `index / steps + amount` wrapped back once when above 1
    pub fn hue(&self, index: usize) -> Scalar {
        let steps = self.ring_count().max(1) as Scalar;
        let hue = index as Scalar / steps + self.amount;
        if hue > 1.0 { hue - 1.0 } else { hue }
    }

    /// Full and half brightness colors of the ring
    pub fn colors(&self, index: usize) -> (Hsb, Hsb) {
        let hue = self.hue(index);
        (Hsb::new(hue, 1.0, 1.0), Hsb::new(hue, 1.0, 0.5))
    }
}

impl<S: InsettableShape> ColorCycling<S> {
    /// Geometry and colors of every ring, outermost first
    pub fn rings(&self, rect: Rect) -> Result<Vec<Ring>, ShapeError> {
        ensure_finite("color cycling", &[self.amount])?;
        let count = self.ring_count();
        if count > MAX_RINGS {
            return Err(ShapeError::range(format!(
                "color cycling requires {} rings, limit is {}",
                count, MAX_RINGS
            )));
        }
        let _span = tracing::debug_span!("[color_cycling]", rings = count).entered();
        (0..count)
            .map(|index| {
                let inset = index as Scalar;
                let (start, end) = self.colors(index);
                Ok(Ring {
                    index,
                    inset,
                    path: self.shape.inset(inset).try_path(rect)?,
                    start,
                    end,
                })
            })
            .collect()
    }
}

impl<S: InsettableShape> Shape for ColorCycling<S> {
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        let mut builder = Path::builder();
        for ring in self.rings(rect)? {
            builder.append(ring.path);
        }
        Ok(builder.build())
    }
}

impl<S: Clone> Animatable for ColorCycling<S> {
    const SIZE: usize = 1;

    fn to_vector(&self) -> Vec<Scalar> {
        vec![self.amount]
    }

    fn set_vector(&mut self, vector: &[Scalar]) -> Result<(), ShapeError> {
        let [amount] = fixed_vector("color cycling", vector)?;
        self.amount = amount;
        Ok(())
    }
}
