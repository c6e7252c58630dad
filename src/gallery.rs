//! Collection of shapes placed into rectangles, loadable from JSON
use crate::{
    Arc, Checkerboard, Circle, ColorCyclingCircle, ColorCyclingRectangle, Flower, Path, Rect,
    Rectangle, Ring, Shape, ShapeError, Spirograph, Trapezoid,
};
use serde::{Deserialize, Serialize};
use std::{fmt, io::Read, io::Write, str::FromStr};

/// Any of the shapes known to the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeKind {
    Triangle,
    Trapezoid(Trapezoid),
    Arrow,
    Rectangle(Rectangle),
    Arc(Arc),
    Circle(Circle),
    Flower(Flower),
    Spirograph(Spirograph),
    Checkerboard(Checkerboard),
    ColorCyclingCircle(ColorCyclingCircle),
    ColorCyclingRectangle(ColorCyclingRectangle),
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
            Self::Trapezoid(_) => "trapezoid",
            Self::Arrow => "arrow",
            Self::Rectangle(_) => "rectangle",
            Self::Arc(_) => "arc",
            Self::Circle(_) => "circle",
            Self::Flower(_) => "flower",
            Self::Spirograph(_) => "spirograph",
            Self::Checkerboard(_) => "checkerboard",
            Self::ColorCyclingCircle(_) => "color_cycling_circle",
            Self::ColorCyclingRectangle(_) => "color_cycling_rectangle",
        }
    }

    /// Colored rings of color cycling shapes, empty for every other shape
    pub fn rings(&self, rect: Rect) -> Result<Vec<Ring>, ShapeError> {
        match self {
            Self::ColorCyclingCircle(shape) => shape.rings(rect),
            Self::ColorCyclingRectangle(shape) => shape.rings(rect),
            _ => Ok(Vec::new()),
        }
    }
}

impl Shape for ShapeKind {
    fn try_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        match self {
            Self::Triangle => crate::Triangle.try_path(rect),
            Self::Trapezoid(shape) => shape.try_path(rect),
            Self::Arrow => crate::Arrow.try_path(rect),
            Self::Rectangle(shape) => shape.try_path(rect),
            Self::Arc(shape) => shape.try_path(rect),
            Self::Circle(shape) => shape.try_path(rect),
            Self::Flower(shape) => shape.try_path(rect),
            Self::Spirograph(shape) => shape.try_path(rect),
            Self::Checkerboard(shape) => shape.try_path(rect),
            Self::ColorCyclingCircle(shape) => shape.try_path(rect),
            Self::ColorCyclingRectangle(shape) => shape.try_path(rect),
        }
    }
}

/// Shape together with the rectangle it is drawn into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub rect: Rect,
    pub shape: ShapeKind,
}

impl GalleryItem {
    pub fn new(rect: Rect, shape: ShapeKind) -> Self {
        Self { rect, shape }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Gallery {
    pub items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, rect: Rect, shape: ShapeKind) -> &mut Self {
        self.items.push(GalleryItem::new(rect, shape));
        self
    }

    /// Load gallery from JSON document
    pub fn from_json(input: impl Read) -> Result<Self, GalleryError> {
        Ok(serde_json::from_reader(input)?)
    }

    /// Write gallery as pretty printed JSON document
    pub fn to_json(&self, output: impl Write) -> Result<(), GalleryError> {
        Ok(serde_json::to_writer_pretty(output, self)?)
    }

    /// Bounding box of all rectangles
    pub fn bbox(&self) -> Option<Rect> {
        self.items.iter().fold(None, |bbox, item| {
            let bbox = match bbox {
                Some(bbox) => bbox.extend(item.rect.min()),
                None => Rect::from_points(item.rect.min(), item.rect.min()),
            };
            Some(bbox.extend(item.rect.max()))
        })
    }

    /// Paths of all items, failing items render as empty paths
    pub fn render(&self) -> Vec<Path> {
        let _span = tracing::info_span!("[gallery:render]", items = self.items.len()).entered();
        self.items.iter().map(|item| item.shape.path(item.rect)).collect()
    }

    /// Paths of all items, stopping at the first failing item
    pub fn try_render(&self) -> Result<Vec<Path>, GalleryError> {
        let _span = tracing::info_span!("[gallery:try_render]", items = self.items.len()).entered();
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.shape
                    .try_path(item.rect)
                    .map_err(|error| GalleryError::Shape { index, error })
            })
            .collect()
    }
}

impl FromStr for Gallery {
    type Err = GalleryError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Error while loading or rendering gallery
#[derive(Debug)]
pub enum GalleryError {
    /// Malformed JSON document
    Json(serde_json::Error),
    /// IO error propagated while reading or writing stream
    Io(std::io::Error),
    /// Item at `index` failed to produce its path
    Shape { index: usize, error: ShapeError },
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(error) => write!(f, "gallery json error: {}", error),
            Self::Io(error) => write!(f, "gallery io error: {}", error),
            Self::Shape { index, error } => write!(f, "gallery item {}: {}", index, error),
        }
    }
}

impl From<std::io::Error> for GalleryError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            Self::Io(error.into())
        } else {
            Self::Json(error)
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(error) => Some(error),
            Self::Io(error) => Some(error),
            Self::Shape { error, .. } => Some(error),
        }
    }
}
