use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point, Rect};

/// Flattening tolerance used whenever curves are converted to paths.
pub const PATH_TOLERANCE: f64 = 0.1;

/// A concrete region on the drawing surface, produced by shapes and effects for one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Circle(kurbo::Circle),
    RoundedRect(kurbo::RoundedRect),
    Path(BezPath),
}

impl Geometry {
    pub fn to_path(&self) -> BezPath {
        match self {
            Self::Circle(c) => c.to_path(PATH_TOLERANCE),
            Self::RoundedRect(r) => r.to_path(PATH_TOLERANCE),
            Self::Path(p) => p.clone(),
        }
    }

    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Circle(c) => c.bounding_box(),
            Self::RoundedRect(r) => r.bounding_box(),
            Self::Path(p) => p.bounding_box(),
        }
    }

    pub fn contains(&self, pt: Point) -> bool {
        match self {
            Self::Circle(c) => c.contains(pt),
            Self::RoundedRect(r) => r.contains(pt),
            Self::Path(p) => p.contains(pt),
        }
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        match self {
            Self::Circle(c) => c.area(),
            Self::RoundedRect(r) => r.area(),
            Self::Path(p) => p.area().abs(),
        }
    }

    /// Zero-area geometry punches nothing.
    pub fn is_empty(&self) -> bool {
        self.area() <= f64::EPSILON
    }
}
