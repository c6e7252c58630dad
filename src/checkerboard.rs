use crate::{
    Path, Rect, Scalar, Shape, ShapeError,
    animation::{Animatable, fixed_vector},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of cells, filled or not, a checkerboard may have
pub const MAX_CHECKERBOARD_CELLS: usize = 250_000;

/// Checkerboard with every cell where `row + column` is even filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Checkerboard {
    pub rows: usize,
    pub columns: usize,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self::new(4, 4)
    }
}

impl Checkerboard {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }
}

impl Shape for Checkerboard {
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        if !rect.is_finite() {
            return Err(ShapeError::degenerate(format!(
                "checkerboard received non-finite rectangle {:?}",
                rect
            )));
        }
        let mut builder = Path::builder();
        if self.rows == 0 || self.columns == 0 {
            return Ok(builder.build());
        }
        match self.rows.checked_mul(self.columns) {
            Some(cells) if cells <= MAX_CHECKERBOARD_CELLS => {}
            _ => {
                return Err(ShapeError::range(format!(
                    "checkerboard {}x{} exceeds limit of {} cells",
                    self.rows, self.columns, MAX_CHECKERBOARD_CELLS
                )));
            }
        }
        let row_size = rect.height() / self.rows as Scalar;
        let column_size = rect.width() / self.columns as Scalar;
        for row in 0..self.rows {
            for column in 0..self.columns {
                if (row + column) % 2 != 0 {
                    continue;
                }
                let cell = Rect::new(
                    rect.min_x() + column as Scalar * column_size,
                    rect.min_y() + row as Scalar * row_size,
                    column_size,
                    row_size,
                );
                builder.append(Path::builder().rect(cell).build());
            }
        }
        Ok(builder.build())
    }
}

impl Animatable for Checkerboard {
    const SIZE: usize = 2;

    fn to_vector(&self) -> Vec<Scalar> {
        vec![self.rows as Scalar, self.columns as Scalar]
    }

    /// Fractional values are truncated towards zero, negative ones become zero
    fn set_vector(&mut self, vector: &[Scalar]) -> Result<(), ShapeError> {
        let [rows, columns] = fixed_vector("checkerboard", vector)?;
        self.rows = rows as usize;
        self.columns = columns as usize;
        Ok(())
    }
}
