use crate::{
    Angle, InsettableShape, Path, Point, Rect, Scalar, Shape, ShapeError,
    animation::{Animatable, fixed_vector},
    shape::ensure_finite,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arc spanning the width of the drawing area
///
/// Angles use the visual convention: 0 points up and `clockwise` arcs go
/// clockwise on the screen (y-axis pointing down).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arc {
    pub start_angle: Angle,
    pub end_angle: Angle,
    pub clockwise: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inset_amount: Scalar,
}

impl Arc {
    pub fn new(start_angle: Angle, end_angle: Angle, clockwise: bool) -> Self {
        Self {
            start_angle,
            end_angle,
            clockwise,
            inset_amount: 0.0,
        }
    }

    /// Center, radius, start, end and clockwise flag in raw arc convention
    pub fn raw_params(&self, rect: Rect) -> (Point, Scalar, Angle, Angle, bool) {
        let rotation = Angle::degrees(90.0);
        (
            rect.mid(),
            rect.width() / 2.0 - self.inset_amount,
            self.start_angle - rotation,
            self.end_angle - rotation,
            !self.clockwise,
        )
    }
}

impl Shape for Arc {
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        ensure_finite(
            "arc",
            &[
                self.start_angle.to_radians(),
                self.end_angle.to_radians(),
                self.inset_amount,
                rect.width(),
            ],
        )?;
        let (center, radius, start, end, clockwise) = self.raw_params(rect);
        if radius < 0.0 {
            return Err(ShapeError::degenerate(format!(
                "arc inset {} exceeds its radius {}",
                self.inset_amount,
                rect.width() / 2.0
            )));
        }
        let mut builder = Path::builder();
        builder
            .move_to(center + radius * Point::polar(start))
            .arc_to(center, radius, start, end, clockwise)?;
        Ok(builder.build())
    }
}

impl InsettableShape for Arc {
    fn inset(&self, amount: Scalar) -> Self {
        Self {
            inset_amount: self.inset_amount + amount,
            ..*self
        }
    }
}

impl Animatable for Arc {
    const SIZE: usize = 3;

    fn to_vector(&self) -> Vec<Scalar> {
        vec![
            self.start_angle.to_radians(),
            self.end_angle.to_radians(),
            self.inset_amount,
        ]
    }

    fn set_vector(&mut self, vector: &[Scalar]) -> Result<(), ShapeError> {
        let [start, end, inset_amount] = fixed_vector("arc", vector)?;
        self.start_angle = Angle::radians(start);
        self.end_angle = Angle::radians(end);
        self.inset_amount = inset_amount;
        Ok(())
    }
}

/// Circle inscribed into the drawing area, shrunk by `inset_amount`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Circle {
    pub inset_amount: Scalar,
}

impl Shape for Circle {
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        ensure_finite("circle", &[self.inset_amount, rect.width(), rect.height()])?;
        let radius = (rect.width().min(rect.height()) / 2.0 - self.inset_amount).max(0.0);
        let diameter = 2.0 * radius;
        let bounds = Rect::new(
            rect.mid_x() - radius,
            rect.mid_y() - radius,
            diameter,
            diameter,
        );
        Ok(Path::builder().ellipse(bounds).build())
    }
}

impl InsettableShape for Circle {
    fn inset(&self, amount: Scalar) -> Self {
        Self {
            inset_amount: self.inset_amount + amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PI, PathCommand, assert_approx_eq};

    fn arc_command(path: &Path) -> crate::CircularArc {
        path.commands()
            .iter()
            .find_map(|command| match command {
                PathCommand::ArcTo(arc) => Some(*arc),
                _ => None,
            })
            .expect("path has no arc")
    }

    #[test]
    fn test_raw_convention() {
        let shape = Arc::new(Angle::ZERO, Angle::degrees(90.0), true);
        let path = shape.path(Rect::new(0.0, 0.0, 300.0, 300.0));
        let arc = arc_command(&path);
        assert_eq!(arc.center, Point::new(150.0, 150.0));
        assert_approx_eq!(arc.radius, 150.0);
        assert_approx_eq!(arc.start.to_degrees(), -90.0, 1e-9);
        assert_approx_eq!(arc.end.to_degrees(), 0.0, 1e-9);
        assert!(!arc.clockwise);
        // visually clockwise from the top to the right side
        assert_approx_eq!(arc.sweep(), PI / 2.0, 1e-9);
        let vertices = path.vertices();
        assert!(vertices[0].is_close_to(Point::new(150.0, 0.0)));
        assert!(vertices[1].is_close_to(Point::new(300.0, 150.0)));
    }

    #[test]
    fn test_inset_additive() {
        let rect = Rect::new(0.0, 0.0, 300.0, 300.0);
        let shape = Arc::new(Angle::ZERO, Angle::degrees(110.0), true);
        let twice = arc_command(&shape.inset(5.0).inset(3.0).path(rect));
        let once = arc_command(&shape.inset(8.0).path(rect));
        assert_eq!(twice, once);
        assert_approx_eq!(once.radius, 142.0);
    }

    #[test]
    fn test_over_inset() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let shape = Arc::new(Angle::ZERO, Angle::degrees(90.0), false).inset(60.0);
        assert!(matches!(
            shape.try_path(rect),
            Err(ShapeError::DegenerateGeometry { .. })
        ));
        assert!(shape.path(rect).is_empty());
    }

    #[test]
    fn test_arc_animatable() -> Result<(), ShapeError> {
        let shape = Arc::new(Angle::ZERO, Angle::degrees(180.0), true).inset(4.0);
        let vector = shape.to_vector();
        assert_eq!(vector.len(), Arc::SIZE);
        let restored = Arc::new(Angle::ZERO, Angle::ZERO, true).with_vector(&vector)?;
        assert_eq!(restored, shape);
        Ok(())
    }

    #[test]
    fn test_deterministic() {
        let rect = Rect::new(7.0, 3.0, 240.0, 180.0);
        let arc = Arc::new(Angle::degrees(30.0), Angle::degrees(250.0), false).inset(6.0);
        assert_eq!(arc.path(rect), arc.path(rect));
        assert_eq!(arc.path(rect).to_svg_path(), arc.path(rect).to_svg_path());
        let circle = Circle::default().inset(12.0);
        assert_eq!(circle.path(rect), circle.path(rect));
    }

    #[test]
    fn test_circle() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let path = Circle::default().inset(10.0).path(rect);
        let bbox = path.bbox().unwrap();
        assert_approx_eq!(bbox.min_x(), 60.0, 1e-9);
        assert_approx_eq!(bbox.width(), 80.0, 1e-9);
        assert_approx_eq!(bbox.height(), 80.0, 1e-9);
        assert_eq!(path.subpaths_count(), 1);
    }
}
