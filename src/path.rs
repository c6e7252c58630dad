use crate::{Angle, CircularArc, Cubic, PI, Point, Rect, Scalar, ShapeError, Transform};
use std::{fmt, io::Write};

/// (4/3)*tan(pi/8) = 4*(sqrt(2)-1)/3, offset of control points for a quarter of a circle
const QUARTER_ARC_KAPPA: Scalar = 0.5522847498307935;

/// Single drawing command of the path
#[derive(Clone, PartialEq)]
pub enum PathCommand {
    /// Start new sub-path at the point
    MoveTo(Point),
    /// Straight line from the current point
    LineTo(Point),
    /// Cubic bezier curve from the current point, `(control0, control1, end)`
    CubicTo(Point, Point, Point),
    /// Circular arc, connected with a straight line to the current point
    ArcTo(CircularArc),
    /// Straight line back to the start of the current sub-path
    Close,
    /// Independent path, not connected to the commands before it
    Append(Path),
}

impl fmt::Debug for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M {:?}", p),
            Self::LineTo(p) => write!(f, "L {:?}", p),
            Self::CubicTo(p1, p2, p3) => write!(f, "C {:?} {:?} {:?}", p1, p2, p3),
            Self::ArcTo(arc) => write!(f, "{:?}", arc),
            Self::Close => write!(f, "Z"),
            Self::Append(path) => {
                writeln!(f, "Append {{")?;
                path.fmt(f)?;
                write!(f, "}}")
            }
        }
    }
}

/// Ordered sequence of drawing commands
///
/// Order is significant since it defines connectivity of the path. Paths are
/// constructed with `PathBuilder` which guarantees that every command requiring
/// current point is preceded by `MoveTo`.
#[derive(Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.commands.is_empty() {
            writeln!(f, "Empty")?;
        } else {
            for command in self.commands.iter() {
                writeln!(f, "{:?}", command)?;
            }
        }
        Ok(())
    }
}

impl Path {
    pub fn empty() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Convenience method to create `PathBuilder`
    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Paths appended as independent sub-paths (direct children only)
    pub fn appended(&self) -> impl Iterator<Item = &Path> + '_ {
        self.commands.iter().filter_map(|command| match command {
            PathCommand::Append(path) => Some(path),
            _ => None,
        })
    }

    /// Visit all commands, descending into appended paths
    fn visit<'a>(&'a self, visitor: &mut impl FnMut(&'a PathCommand)) {
        for command in self.commands.iter() {
            match command {
                PathCommand::Append(path) => path.visit(visitor),
                _ => visitor(command),
            }
        }
    }

    /// All commands with appended paths inlined
    pub fn flat_commands(&self) -> Vec<PathCommand> {
        let mut commands = Vec::new();
        self.visit(&mut |command| commands.push(command.clone()));
        commands
    }

    /// Number of sub-paths, including the ones inside appended paths
    pub fn subpaths_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |command| {
            if matches!(command, PathCommand::MoveTo(_)) {
                count += 1;
            }
        });
        count
    }

    /// Sub-path start and current point after the last command
    fn cursor(&self) -> Option<(Point, Point)> {
        let mut cursor = None;
        self.visit(&mut |command| {
            cursor = match (command, cursor) {
                (PathCommand::MoveTo(p), _) => Some((*p, *p)),
                (PathCommand::LineTo(p), Some((start, _))) => Some((start, *p)),
                (PathCommand::CubicTo(_, _, p), Some((start, _))) => Some((start, *p)),
                (PathCommand::ArcTo(arc), Some((start, _))) => Some((start, arc.end_point())),
                (PathCommand::Close, Some((start, _))) => Some((start, start)),
                (_, cursor) => cursor,
            };
        });
        cursor
    }

    /// Explicitly specified points of the path in drawing order
    ///
    /// Control points of curves are skipped, arcs contribute their start
    /// (unless it coincides with the current point) and end points.
    pub fn vertices(&self) -> Vec<Point> {
        let mut vertices: Vec<Point> = Vec::new();
        self.visit(&mut |command| match command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::CubicTo(_, _, p) => {
                vertices.push(*p)
            }
            PathCommand::ArcTo(arc) => {
                let start = arc.start_point();
                if !vertices.last().is_some_and(|last| last.is_close_to(start)) {
                    vertices.push(start);
                }
                vertices.push(arc.end_point());
            }
            PathCommand::Close | PathCommand::Append(_) => {}
        });
        vertices
    }

    /// Vertices as a flat `[x0, y0, x1, y1, ...]` buffer
    pub fn vertex_buffer(&self) -> Vec<Scalar> {
        Point::as_scalars(&self.vertices()).to_vec()
    }

    /// Apply transformation to the path
    ///
    /// Arcs are converted to cubic bezier curves since affine transformation of
    /// a circle is not necessarily a circle.
    pub fn transform(&self, tr: Transform) -> Path {
        let mut commands = Vec::with_capacity(self.commands.len());
        let mut position: Option<Point> = None;
        let mut start: Option<Point> = None;
        for command in self.commands.iter() {
            match command {
                PathCommand::MoveTo(p) => {
                    start = Some(*p);
                    position = Some(*p);
                    commands.push(PathCommand::MoveTo(tr.apply(*p)));
                }
                PathCommand::LineTo(p) => {
                    position = Some(*p);
                    commands.push(PathCommand::LineTo(tr.apply(*p)));
                }
                PathCommand::CubicTo(p1, p2, p3) => {
                    position = Some(*p3);
                    commands.push(PathCommand::CubicTo(
                        tr.apply(*p1),
                        tr.apply(*p2),
                        tr.apply(*p3),
                    ));
                }
                PathCommand::ArcTo(arc) => {
                    let arc_start = arc.start_point();
                    if !position.is_some_and(|p| p.is_close_to(arc_start)) {
                        commands.push(PathCommand::LineTo(tr.apply(arc_start)));
                    }
                    for cubic in arc.to_cubics() {
                        let Cubic([_, p1, p2, p3]) = cubic.transform(tr);
                        commands.push(PathCommand::CubicTo(p1, p2, p3));
                    }
                    position = Some(arc.end_point());
                }
                PathCommand::Close => {
                    position = start;
                    commands.push(PathCommand::Close);
                }
                PathCommand::Append(path) => {
                    commands.push(PathCommand::Append(path.transform(tr)));
                    if let Some((path_start, path_position)) = path.cursor() {
                        start = Some(path_start);
                        position = Some(path_position);
                    }
                }
            }
        }
        Path { commands }
    }

    /// Bounding box of the path, `None` if the path is empty
    ///
    /// Curves contribute their control points, so the box is never smaller than
    /// the actual geometry.
    pub fn bbox(&self) -> Option<Rect> {
        let lowered = self.transform(Transform::identity());
        let mut bbox: Option<Rect> = None;
        let mut extend = |point: Point| {
            bbox = Some(match bbox {
                Some(bbox) => bbox.extend(point),
                None => Rect::from_points(point, point),
            });
        };
        lowered.visit(&mut |command| match command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => extend(*p),
            PathCommand::CubicTo(p1, p2, p3) => {
                extend(*p1);
                extend(*p2);
                extend(*p3);
            }
            PathCommand::ArcTo(arc) => {
                extend(arc.start_point());
                extend(arc.end_point());
            }
            PathCommand::Close | PathCommand::Append(_) => {}
        });
        bbox
    }

    /// Save path in SVG path format.
    pub fn save(&self, mut out: impl Write) -> std::io::Result<()> {
        let mut position: Option<Point> = None;
        let mut start: Option<Point> = None;
        let mut result = Ok(());
        self.visit(&mut |command| {
            if result.is_err() {
                return;
            }
            result = save_command(&mut out, command, &mut position, &mut start);
        });
        result
    }

    /// Convert path to SVG path representation
    pub fn to_svg_path(&self) -> String {
        let mut output = Vec::new();
        match self.save(&mut output) {
            Ok(()) => String::from_utf8_lossy(&output).trim_end().to_owned(),
            // writing into a vector never fails
            Err(_) => String::new(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = <&'a Vec<PathCommand> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

fn save_command(
    out: &mut impl Write,
    command: &PathCommand,
    position: &mut Option<Point>,
    start: &mut Option<Point>,
) -> std::io::Result<()> {
    match command {
        PathCommand::MoveTo(p) => {
            out.write_all(b"M")?;
            write_point(out, *p)?;
            *start = Some(*p);
            *position = Some(*p);
        }
        PathCommand::LineTo(p) => {
            out.write_all(b"L")?;
            write_point(out, *p)?;
            *position = Some(*p);
        }
        PathCommand::CubicTo(p1, p2, p3) => {
            out.write_all(b"C")?;
            write_point(out, *p1)?;
            write_point(out, *p2)?;
            write_point(out, *p3)?;
            *position = Some(*p3);
        }
        PathCommand::ArcTo(arc) => {
            let arc_start = arc.start_point();
            if !position.is_some_and(|p| p.is_close_to(arc_start)) {
                out.write_all(b"L")?;
                write_point(out, arc_start)?;
            }
            // single SVG arc can not describe a full circle, split it in halves
            let sweep = arc.sweep();
            let parts = if sweep.abs() > PI { 2 } else { 1 };
            for part in 1..=parts {
                let end = arc.at(part as Scalar / parts as Scalar);
                out.write_all(b"A")?;
                write_scalar(out, arc.radius)?;
                write_scalar(out, arc.radius)?;
                out.write_all(b"0 0 ")?;
                out.write_all(if sweep > 0.0 { b"1 " } else { b"0 " })?;
                write_point(out, end)?;
            }
            *position = Some(arc.end_point());
        }
        PathCommand::Close => {
            out.write_all(b"Z ")?;
            *position = *start;
        }
        PathCommand::Append(_) => {}
    }
    Ok(())
}

fn write_point(out: &mut impl Write, point: Point) -> std::io::Result<()> {
    write_scalar(out, point.x())?;
    write_scalar(out, point.y())
}

/// Write scalar rounded to four decimal places followed by a space
fn write_scalar(out: &mut impl Write, value: Scalar) -> std::io::Result<()> {
    let value = (value * 1e4).round() / 1e4;
    if value.fract() == 0.0 && value.abs() < 1e15 {
        write!(out, "{} ", value as i64)
    } else {
        let mut buffer = [0u8; lexical_core::BUFFER_SIZE];
        out.write_all(lexical_core::write(value, &mut buffer))?;
        out.write_all(b" ")
    }
}

/// Path builder similar to Canvas/CoreGraphics interface.
#[derive(Clone, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    /// Start of the current sub-path
    start: Option<Point>,
    /// Current point, `None` until first `move_to`
    position: Option<Point>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build path
    pub fn build(&mut self) -> Path {
        let PathBuilder { commands, .. } = std::mem::take(self);
        Path { commands }
    }

    fn current(&self, command: &'static str) -> Result<Point, ShapeError> {
        self.position.ok_or(ShapeError::PathState { command })
    }

    /// Start new sub-path at the specified point
    pub fn move_to(&mut self, p: impl Into<Point>) -> &mut Self {
        let p = p.into();
        self.commands.push(PathCommand::MoveTo(p));
        self.start = Some(p);
        self.position = Some(p);
        self
    }

    /// Add line from the current position to the specified point
    pub fn line_to(&mut self, p: impl Into<Point>) -> Result<&mut Self, ShapeError> {
        self.current("line_to")?;
        let p = p.into();
        self.commands.push(PathCommand::LineTo(p));
        self.position = Some(p);
        Ok(self)
    }

    /// Add cubic bezier curve
    pub fn cubic_to(
        &mut self,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
    ) -> Result<&mut Self, ShapeError> {
        self.current("cubic_to")?;
        let p3 = p3.into();
        self.commands
            .push(PathCommand::CubicTo(p1.into(), p2.into(), p3));
        self.position = Some(p3);
        Ok(self)
    }

    /// Add circular arc, in raw mathematical convention (0 is positive x-axis)
    ///
    /// Non-finite or negative radius and non-finite angles produce no segment.
    pub fn arc_to(
        &mut self,
        center: impl Into<Point>,
        radius: Scalar,
        start: Angle,
        end: Angle,
        clockwise: bool,
    ) -> Result<&mut Self, ShapeError> {
        self.current("arc_to")?;
        let center = center.into();
        if !(radius.is_finite() && radius >= 0.0)
            || !center.is_finite()
            || !start.is_finite()
            || !end.is_finite()
        {
            tracing::trace!(?center, radius, ?start, ?end, "[arc_to] degenerate arc skipped");
            return Ok(self);
        }
        let arc = CircularArc::new(center, radius, start, end, clockwise);
        self.position = Some(arc.end_point());
        self.commands.push(PathCommand::ArcTo(arc));
        Ok(self)
    }

    /// Close current sub-path with a line to its start
    pub fn close(&mut self) -> Result<&mut Self, ShapeError> {
        self.current("close")?;
        self.commands.push(PathCommand::Close);
        self.position = self.start;
        Ok(self)
    }

    /// Append other path as an independent sub-path, no connecting line is added
    pub fn append(&mut self, path: Path) -> &mut Self {
        if path.is_empty() {
            return self;
        }
        if let Some((start, position)) = path.cursor() {
            self.start = Some(start);
            self.position = Some(position);
        }
        self.commands.push(PathCommand::Append(path));
        self
    }

    /// Add closed ellipse inscribed into the rectangle
    ///
    /// Starts at `(max_x, mid_y)` and runs through `(mid_x, max_y)`.
    pub fn ellipse(&mut self, rect: Rect) -> &mut Self {
        let rx = rect.width() / 2.0;
        let ry = rect.height() / 2.0;
        let c = rect.mid();
        let kx = QUARTER_ARC_KAPPA * rx;
        let ky = QUARTER_ARC_KAPPA * ry;
        let p0 = c + Point::new(rx, 0.0);
        let p1 = c + Point::new(0.0, ry);
        let p2 = c - Point::new(rx, 0.0);
        let p3 = c - Point::new(0.0, ry);
        self.move_to(p0);
        self.commands.extend([
            PathCommand::CubicTo(p0 + Point::new(0.0, ky), p1 + Point::new(kx, 0.0), p1),
            PathCommand::CubicTo(p1 - Point::new(kx, 0.0), p2 + Point::new(0.0, ky), p2),
            PathCommand::CubicTo(p2 - Point::new(0.0, ky), p3 - Point::new(kx, 0.0), p3),
            PathCommand::CubicTo(p3 + Point::new(kx, 0.0), p0 - Point::new(0.0, ky), p0),
            PathCommand::Close,
        ]);
        self.position = Some(p0);
        self
    }

    /// Add closed axis aligned rectangle, starting at its minimal corner
    pub fn rect(&mut self, rect: Rect) -> &mut Self {
        self.move_to(rect.min());
        self.commands.extend([
            PathCommand::LineTo(Point::new(rect.max_x(), rect.min_y())),
            PathCommand::LineTo(rect.max()),
            PathCommand::LineTo(Point::new(rect.min_x(), rect.max_y())),
            PathCommand::Close,
        ]);
        self.position = Some(rect.min());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_requires_current_point() {
        let mut builder = Path::builder();
        assert_eq!(
            builder.line_to((1.0, 1.0)).err(),
            Some(ShapeError::PathState { command: "line_to" })
        );
        assert!(matches!(
            builder.arc_to((0.0, 0.0), 1.0, Angle::ZERO, Angle::degrees(90.0), false),
            Err(ShapeError::PathState { command: "arc_to" })
        ));
        assert!(builder.close().is_err());
        assert!(builder.cubic_to((0.0, 0.0), (1.0, 1.0), (2.0, 0.0)).is_err());
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_builder() -> Result<(), ShapeError> {
        let path = Path::builder()
            .move_to((0.0, 0.0))
            .line_to((10.0, 0.0))?
            .line_to((10.0, 10.0))?
            .close()?
            .build();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(10.0, 0.0)),
                PathCommand::LineTo(Point::new(10.0, 10.0)),
                PathCommand::Close,
            ]
        );
        assert_eq!(path.to_svg_path(), "M0 0 L10 0 L10 10 Z");
        Ok(())
    }

    #[test]
    fn test_degenerate_arc() -> Result<(), ShapeError> {
        let mut builder = Path::builder();
        builder
            .move_to((0.0, 0.0))
            .arc_to((0.0, 0.0), 10.0, Angle::radians(Scalar::NAN), Angle::ZERO, false)?
            .arc_to((0.0, 0.0), -1.0, Angle::ZERO, Angle::degrees(90.0), false)?;
        let path = builder.build();
        assert_eq!(path.commands().len(), 1);

        let path = Path::builder()
            .move_to((0.0, 0.0))
            .arc_to((0.0, 0.0), 0.0, Angle::ZERO, Angle::degrees(90.0), false)?
            .build();
        assert_eq!(path.commands().len(), 2);
        Ok(())
    }

    #[test]
    fn test_append() -> Result<(), ShapeError> {
        let square = Path::builder().rect(Rect::new(10.0, 10.0, 5.0, 5.0)).build();
        let path = Path::builder()
            .move_to((0.0, 0.0))
            .line_to((5.0, 0.0))?
            .append(square.clone())
            .line_to((20.0, 20.0))?
            .build();
        assert_eq!(path.appended().count(), 1);
        assert_eq!(path.subpaths_count(), 2);
        // no connecting line is inserted before the appended path
        let flat = path.flat_commands();
        assert_eq!(flat[2], PathCommand::MoveTo(Point::new(10.0, 10.0)));
        // current point continues from the end of the appended path
        assert_eq!(
            path.vertices(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(5.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(15.0, 10.0),
                Point::new(15.0, 15.0),
                Point::new(10.0, 15.0),
                Point::new(20.0, 20.0),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_transform() -> Result<(), ShapeError> {
        let path = Path::builder()
            .move_to((10.0, 0.0))
            .arc_to((0.0, 0.0), 10.0, Angle::ZERO, Angle::degrees(180.0), false)?
            .line_to((0.0, 0.0))?
            .build();
        let tr = Transform::new_translate(5.0, 5.0);
        let moved = path.transform(tr);
        // arc is converted to two cubics, no extra line since arc starts at current point
        let commands = moved.commands();
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[1], PathCommand::CubicTo(..)));
        assert!(matches!(commands[2], PathCommand::CubicTo(..)));
        let vertices = moved.vertices();
        assert!(vertices[2].is_close_to(Point::new(-5.0, 5.0)));
        assert_eq!(vertices[3], Point::new(5.0, 5.0));
        Ok(())
    }

    #[test]
    fn test_bbox() -> Result<(), ShapeError> {
        assert!(Path::empty().bbox().is_none());
        let path = Path::builder()
            .ellipse(Rect::new(10.0, 20.0, 40.0, 20.0))
            .build();
        let bbox = path.bbox().unwrap();
        assert_approx_eq!(bbox.min_x(), 10.0, 1e-9);
        assert_approx_eq!(bbox.min_y(), 20.0, 1e-9);
        assert_approx_eq!(bbox.width(), 40.0, 1e-9);
        assert_approx_eq!(bbox.height(), 20.0, 1e-9);
        Ok(())
    }

    #[test]
    fn test_svg_arc() -> Result<(), ShapeError> {
        let path = Path::builder()
            .move_to((0.0, 0.0))
            .arc_to((0.0, 0.0), 10.0, Angle::ZERO, Angle::degrees(90.0), false)?
            .build();
        assert_eq!(path.to_svg_path(), "M0 0 L10 0 A10 10 0 0 1 0 10");

        let path = Path::builder()
            .move_to((10.0, 0.0))
            .arc_to((0.0, 0.0), 10.0, Angle::ZERO, Angle::degrees(360.0), false)?
            .build();
        assert_eq!(
            path.to_svg_path(),
            "M10 0 A10 10 0 0 1 -10 0 A10 10 0 0 1 10 0"
        );
        Ok(())
    }

    #[test]
    fn test_svg_fraction() {
        let path = Path::builder().move_to((0.25, 1.5)).build();
        assert_eq!(path.to_svg_path(), "M0.25 1.5");
        assert_eq!(path.vertex_buffer(), vec![0.25, 1.5]);
    }
}
