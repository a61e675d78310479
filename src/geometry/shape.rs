use std::time::Duration;

use crate::{
    animation::ease::Ease,
    foundation::core::{Affine, BezPath, Point, Rect, clamp_progress},
    foundation::error::{SpotlightError, SpotlightResult},
    geometry::region::Geometry,
};

pub const DEFAULT_SHAPE_DURATION: Duration = Duration::from_millis(500);
pub const DEFAULT_SHAPE_EASE: Ease = Ease::Decelerate(2.0);

/// Hole geometry variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    Circle { radius: f64 },
    RoundedRectangle { width: f64, height: f64, radius: f64 },
    /// Closed path in anchor-local coordinates (origin = anchor).
    Custom { path: BezPath },
}

/// The "hole" punched through the dim layer, with its own grow/shrink timing.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub duration: Duration,
    pub ease: Ease,
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            duration: DEFAULT_SHAPE_DURATION,
            ease: DEFAULT_SHAPE_EASE,
        }
    }

    pub fn circle(radius: f64) -> Self {
        Self::new(ShapeKind::Circle { radius })
    }

    pub fn rounded_rectangle(width: f64, height: f64, radius: f64) -> Self {
        Self::new(ShapeKind::RoundedRectangle {
            width,
            height,
            radius,
        })
    }

    pub fn custom(path: BezPath) -> Self {
        Self::new(ShapeKind::Custom { path })
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Hole geometry at `progress` (clamped to `[0, 1]`), centered on `anchor`.
    pub fn geometry(&self, anchor: Point, progress: f64) -> Geometry {
        let p = clamp_progress(progress);
        match &self.kind {
            ShapeKind::Circle { radius } => {
                Geometry::Circle(kurbo::Circle::new(anchor, radius * p))
            }
            ShapeKind::RoundedRectangle {
                width,
                height,
                radius,
            } => {
                let half_w = width / 2.0 * p;
                let half_h = height / 2.0 * p;
                let rect = Rect::new(
                    anchor.x - half_w,
                    anchor.y - half_h,
                    anchor.x + half_w,
                    anchor.y + half_h,
                );
                Geometry::RoundedRect(kurbo::RoundedRect::from_rect(rect, *radius))
            }
            ShapeKind::Custom { path } => {
                let xf = Affine::translate(anchor.to_vec2()) * Affine::scale(p);
                Geometry::Path(xf * path.clone())
            }
        }
    }

    pub fn validate(&self) -> SpotlightResult<()> {
        let dims_ok = match &self.kind {
            ShapeKind::Circle { radius } => radius.is_finite() && *radius >= 0.0,
            ShapeKind::RoundedRectangle {
                width,
                height,
                radius,
            } => [*width, *height, *radius]
                .iter()
                .all(|v| v.is_finite() && *v >= 0.0),
            ShapeKind::Custom { path } => !path.elements().is_empty(),
        };
        if !dims_ok {
            return Err(SpotlightError::validation(format!(
                "shape dimensions must be finite and >= 0: {:?}",
                self.kind
            )));
        }
        if !self.ease.is_valid() {
            return Err(SpotlightError::validation(format!(
                "shape ease is invalid: {:?}",
                self.ease
            )));
        }
        Ok(())
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::circle(100.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shape.rs"]
mod tests;
