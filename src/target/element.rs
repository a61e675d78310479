use crate::foundation::core::{Point, Rect, Size};

/// A laid-out element of the host UI that a target can be derived from.
///
/// Implementations must report values after layout; an element that has not been laid out
/// yet typically reports zeros and yields a degenerate target at the origin.
pub trait UiElement {
    /// Top-left corner in surface coordinates.
    fn global_position(&self) -> Point;

    fn rendered_size(&self) -> Size;

    /// Center of the element, used as a target anchor.
    fn center(&self) -> Point {
        let p = self.global_position();
        let s = self.rendered_size();
        Point::new(p.x + s.width / 2.0, p.y + s.height / 2.0)
    }
}

impl UiElement for Rect {
    fn global_position(&self) -> Point {
        self.origin()
    }

    fn rendered_size(&self) -> Size {
        self.size()
    }
}

impl<T: UiElement + ?Sized> UiElement for &T {
    fn global_position(&self) -> Point {
        (**self).global_position()
    }

    fn rendered_size(&self) -> Size {
        (**self).rendered_size()
    }
}
