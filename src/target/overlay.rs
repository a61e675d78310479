use crate::{
    foundation::core::{Point, Rect, Rgba8, Viewport},
    render::surface::DrawSurface,
};

/// What a tap on an overlay control asks the sequence to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayAction {
    Next,
    Previous,
    Finish,
    /// Forward the tap to the target's `on_clicked` callback.
    Click,
}

/// Custom content drawn above the dim layer for one target.
pub trait OverlayView {
    fn draw(&self, surface: &mut dyn DrawSurface, viewport: Viewport, alpha: f64);

    /// Which control, if any, sits under `point`.
    fn hit_test(&self, point: Point) -> Option<OverlayAction>;
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayControl {
    pub rect: Rect,
    pub action: OverlayAction,
    pub color: Rgba8,
}

/// Overlay made of rectangular buttons, e.g. "close target" and "close spotlight".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlOverlay {
    controls: Vec<OverlayControl>,
}

impl ControlOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control(mut self, rect: Rect, action: OverlayAction, color: Rgba8) -> Self {
        self.controls.push(OverlayControl {
            rect,
            action,
            color,
        });
        self
    }

    pub fn controls(&self) -> &[OverlayControl] {
        &self.controls
    }
}

impl FromIterator<OverlayControl> for ControlOverlay {
    fn from_iter<I: IntoIterator<Item = OverlayControl>>(iter: I) -> Self {
        Self {
            controls: iter.into_iter().collect(),
        }
    }
}

impl OverlayView for ControlOverlay {
    fn draw(&self, surface: &mut dyn DrawSurface, _viewport: Viewport, alpha: f64) {
        for c in &self.controls {
            surface.fill_rect(c.rect, c.color.scale_alpha(alpha));
        }
    }

    fn hit_test(&self, point: Point) -> Option<OverlayAction> {
        // Later controls are drawn on top.
        self.controls
            .iter()
            .rev()
            .find(|c| c.rect.contains(point))
            .map(|c| c.action)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/target/overlay.rs"]
mod tests;
