use std::rc::Rc;

use crate::{
    effects::effect::Effect,
    foundation::core::{Point, Rect, Size},
    foundation::error::{SpotlightError, SpotlightResult},
    geometry::shape::Shape,
    target::{element::UiElement, listener::TargetListener, overlay::OverlayView},
};

/// Extra room the fitted hole leaves around the target on each axis.
pub const FIT_MARGIN: f64 = 20.0;
/// Corner radius of the fitted hole.
pub const FIT_CORNER_RADIUS: f64 = 10.0;

/// Explanatory text shown in the bubble next to a target.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Text(String);

impl Text {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// How [`TargetBuilder::build`] chooses the hole shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapePolicy {
    /// Rounded rectangle fitted around the target size; the configured shape is ignored.
    #[default]
    FitTarget,
    /// Use the shape passed to [`TargetBuilder::set_shape`].
    AsConfigured,
}

/// One step of a spotlight sequence.
pub struct Target {
    anchor: Point,
    size: Size,
    text: Option<Text>,
    shape: Shape,
    effect: Effect,
    overlay: Option<Rc<dyn OverlayView>>,
    listener: Option<TargetListener>,
}

impl Target {
    pub fn builder() -> TargetBuilder {
        TargetBuilder::new()
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Area covered by the target itself, centered on the anchor.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.anchor, self.size)
    }

    pub fn text(&self) -> Option<&Text> {
        self.text.as_ref()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    pub fn overlay(&self) -> Option<&Rc<dyn OverlayView>> {
        self.overlay.as_ref()
    }

    /// Replace the listener after construction.
    pub fn set_listener(&mut self, listener: TargetListener) {
        self.listener = Some(listener);
    }

    pub(crate) fn listener_mut(&mut self) -> Option<&mut TargetListener> {
        self.listener.as_mut()
    }
}

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Target")
            .field("anchor", &self.anchor)
            .field("size", &self.size)
            .field("text", &self.text)
            .field("shape", &self.shape)
            .field("effect", &self.effect)
            .field("overlay", &self.overlay.is_some())
            .field("listener", &self.listener)
            .finish()
    }
}

/// Builder for [`Target`]. Defaults: anchor at the origin, zero size, `Circle(100)`,
/// no effect, no text, no overlay, no listener.
#[derive(Default)]
pub struct TargetBuilder {
    anchor: Point,
    size: Size,
    text: Option<Text>,
    shape: Shape,
    effect: Effect,
    overlay: Option<Rc<dyn OverlayView>>,
    listener: Option<TargetListener>,
    shape_policy: ShapePolicy,
}

impl TargetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_anchor(mut self, anchor: Point) -> Self {
        self.anchor = anchor;
        self
    }

    /// Anchor at the center of a laid-out element.
    pub fn set_anchor_from(mut self, element: &impl UiElement) -> Self {
        self.anchor = element.center();
        self
    }

    pub fn set_size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn set_size_from(mut self, element: &impl UiElement) -> Self {
        self.size = element.rendered_size();
        self
    }

    /// Anchor and size from the same element.
    pub fn set_view(self, element: &impl UiElement) -> Self {
        self.set_anchor_from(element).set_size_from(element)
    }

    pub fn set_text(mut self, text: impl Into<Text>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn set_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn set_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    pub fn set_overlay(mut self, overlay: Rc<dyn OverlayView>) -> Self {
        self.overlay = Some(overlay);
        self
    }

    pub fn set_on_target_listener(mut self, listener: TargetListener) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn set_shape_policy(mut self, policy: ShapePolicy) -> Self {
        self.shape_policy = policy;
        self
    }

    pub fn build(self) -> SpotlightResult<Target> {
        if !self.anchor.x.is_finite() || !self.anchor.y.is_finite() {
            return Err(SpotlightError::validation(format!(
                "target anchor must be finite, got {:?}",
                self.anchor
            )));
        }
        let Size { width, height } = self.size;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(SpotlightError::validation(format!(
                "target size must be finite and >= 0, got {width}x{height}"
            )));
        }

        let shape = match self.shape_policy {
            ShapePolicy::FitTarget => Shape::rounded_rectangle(
                width + FIT_MARGIN,
                height + FIT_MARGIN,
                FIT_CORNER_RADIUS,
            ),
            ShapePolicy::AsConfigured => self.shape,
        };
        shape.validate()?;
        self.effect.validate()?;

        Ok(Target {
            anchor: self.anchor,
            size: self.size,
            text: self.text,
            shape,
            effect: self.effect,
            overlay: self.overlay,
            listener: self.listener,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/target/model.rs"]
mod tests;
