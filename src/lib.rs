//! Parametric 2D shapes that fit themselves into a rectangle and produce paths.
//!
//! Main features:
//!  - Path construction with checked drawing state and SVG path output
//!  - Affine transforms with explicit composition order
//!  - Shapes: triangle, trapezoid, arrow, arc, circle, rectangle, flower,
//!    spirograph, checkerboard and color cycling rings
//!  - Animatable parameter vectors with linear interpolation
//!  - JSON loadable galleries of shapes
//!
#![deny(warnings)]

mod animation;
mod arc;
mod checkerboard;
mod color;
mod color_cycling;
mod curve;
mod flower;
#[cfg(feature = "serde")]
mod gallery;
mod geometry;
mod path;
mod polygon;
mod shape;
mod spirograph;
mod utils;

pub use animation::{Animatable, AnimatableVector, interpolate, interpolate_vector};
pub use arc::{Arc, Circle};
pub use checkerboard::{Checkerboard, MAX_CHECKERBOARD_CELLS};
pub use color::{ColorError, Hsb, RGBA};
pub use color_cycling::{
    ColorCycling, ColorCyclingCircle, ColorCyclingRectangle, DEFAULT_STEPS, MAX_RINGS, Ring,
};
pub use curve::{ArcCubicIter, CircularArc, Cubic};
pub use flower::{Flower, PETAL_COUNT};
#[cfg(feature = "serde")]
pub use gallery::{Gallery, GalleryError, GalleryItem, ShapeKind};
pub use geometry::{Angle, EPSILON, PI, Point, Rect, Scalar, Transform, compose, scalar_fmt};
pub use path::{Path, PathBuilder, PathCommand};
pub use polygon::{Arrow, Rectangle, Trapezoid, Triangle};
pub use shape::{InsettableShape, Shape, ShapeError};
pub use spirograph::{Spirograph, SpirographLimits, THETA_STEP};
pub use utils::gcd;
