use crate::{
    Angle, PI, Path, Rect, Scalar, Shape, ShapeError, Transform,
    animation::{Animatable, fixed_vector},
    shape::ensure_finite,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of petals, one every `PI / 8` radians
pub const PETAL_COUNT: usize = 16;

/// Flower made of elliptical petals rotated around the center of the drawing area
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Flower {
    /// Horizontal shift of each petal from the center
    pub petal_offset: Scalar,
    /// Width of each petal
    pub petal_width: Scalar,
}

impl Default for Flower {
    fn default() -> Self {
        Self {
            petal_offset: -20.0,
            petal_width: 100.0,
        }
    }
}

impl Flower {
    pub fn new(petal_offset: Scalar, petal_width: Scalar) -> Self {
        Self {
            petal_offset,
            petal_width,
        }
    }

    /// Petal placement, rotation about the origin followed by the move to the center
    fn petal_transform(rect: Rect, angle: Angle) -> Transform {
        Transform::new_rotate(angle)
            .then(Transform::new_translate(rect.width() / 2.0, rect.height() / 2.0))
    }
}

impl Shape for Flower {
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        ensure_finite(
            "flower",
            &[
                self.petal_offset,
                self.petal_width,
                rect.width(),
                rect.height(),
            ],
        )?;
        let petal = Path::builder()
            .ellipse(Rect::new(
                self.petal_offset,
                0.0,
                self.petal_width,
                rect.width() / 2.0,
            ))
            .build();
        let mut builder = Path::builder();
        for index in 0..PETAL_COUNT {
            let angle = Angle::radians(index as Scalar * PI / 8.0);
            builder.append(petal.transform(Self::petal_transform(rect, angle)));
        }
        Ok(builder.build())
    }
}

impl Animatable for Flower {
    const SIZE: usize = 2;

    fn to_vector(&self) -> Vec<Scalar> {
        vec![self.petal_offset, self.petal_width]
    }

    fn set_vector(&mut self, vector: &[Scalar]) -> Result<(), ShapeError> {
        let [petal_offset, petal_width] = fixed_vector("flower", vector)?;
        self.petal_offset = petal_offset;
        self.petal_width = petal_width;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, assert_approx_eq};

    #[test]
    fn test_petal_count() {
        for rect in [
            Rect::new(0.0, 0.0, 400.0, 400.0),
            Rect::new(10.0, 10.0, 50.0, 300.0),
        ] {
            let path = Flower::default().path(rect);
            assert_eq!(path.appended().count(), PETAL_COUNT);
            assert_eq!(path.subpaths_count(), PETAL_COUNT);
        }
    }

    #[test]
    fn test_petal_rotated_in_place() {
        let rect = Rect::new(0.0, 0.0, 400.0, 400.0);
        let path = Flower::default().path(rect);
        let center = Point::new(200.0, 200.0);
        let petals: Vec<_> = path.appended().collect();

        // first petal is not rotated, only moved to the center
        let first = petals[0].vertices()[0];
        assert!(first.is_close_to(Point::new(80.0 + 200.0, 100.0 + 200.0)));

        // every petal keeps the same distance from the center
        let distance = first.dist(center);
        for petal in petals.iter() {
            assert_approx_eq!(petal.vertices()[0].dist(center), distance, 1e-9);
        }

        // fourth petal is rotated by PI / 2 around the center
        let fourth = petals[4].vertices()[0];
        assert!(fourth.is_close_to(Point::new(-100.0 + 200.0, 80.0 + 200.0)));
    }

    #[test]
    fn test_translate_first_differs() {
        let rect = Rect::new(0.0, 0.0, 400.0, 400.0);
        let angle = Angle::radians(PI / 2.0);
        let right = Flower::petal_transform(rect, angle);
        let wrong = Transform::new_translate(200.0, 200.0).then(Transform::new_rotate(angle));
        let p = Point::new(0.0, 0.0);
        assert!(right.apply(p).is_close_to(Point::new(200.0, 200.0)));
        assert!(wrong.apply(p).is_close_to(Point::new(-200.0, 200.0)));
    }

    #[test]
    fn test_deterministic() {
        let rect = Rect::new(12.0, 8.0, 350.0, 280.0);
        let flower = Flower::new(-35.0, 70.0);
        assert_eq!(flower.path(rect), flower.path(rect));
        assert_eq!(flower.path(rect).to_svg_path(), flower.path(rect).to_svg_path());
    }

    #[test]
    fn test_animatable() -> Result<(), ShapeError> {
        let flower = Flower::default().with_vector(&[-10.0, 50.0])?;
        assert_eq!(flower, Flower::new(-10.0, 50.0));
        assert_eq!(flower.to_vector(), vec![-10.0, 50.0]);
        Ok(())
    }
}
