use std::time::Duration;

use crate::{
    animation::{
        ease::Ease,
        timeline::{TickEvent, Timeline},
    },
    foundation::core::{Point, Rect, Rgba8, Viewport},
    layout::bubble::{BubbleLayout, MonospaceMetrics, TextMetrics},
    render::surface::{DrawSurface, TextStyle},
    target::{model::Target, overlay::OverlayAction},
    view::snapshot::{TargetPhase, TargetSnapshot},
};

/// Something the view finished during [`SpotlightView::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    FadeInCompleted,
    FadeOutCompleted,
    TargetEntered,
    TargetExited,
}

/// Per-frame values, sampled once so a frame never mixes two points in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameValues {
    pub alpha: f64,
    pub shape: f64,
    pub effect: Option<f64>,
    pub text: f64,
}

/// The drawable overlay: dim layer, hole, effect, overlay controls and text bubble.
///
/// Owns every timeline of the current target and the whole-view alpha. It knows nothing about
/// the queue; [`crate::spotlight::Spotlight`] decides what comes next.
pub struct SpotlightView {
    viewport: Viewport,
    background: Rgba8,
    text_style: TextStyle,
    metrics: Box<dyn TextMetrics>,
    alpha: Timeline,
    current: Option<TargetSnapshot>,
}

impl SpotlightView {
    pub fn new(viewport: Viewport, background: Rgba8) -> Self {
        Self {
            viewport,
            background,
            text_style: TextStyle::default(),
            metrics: Box::new(MonospaceMetrics::default()),
            alpha: Timeline::settled(0.0),
            current: None,
        }
    }

    pub fn set_text_metrics(&mut self, metrics: Box<dyn TextMetrics>) {
        self.metrics = metrics;
        self.relayout();
    }

    pub fn set_text_style(&mut self, style: TextStyle) {
        self.text_style = style;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn background(&self) -> Rgba8 {
        self.background
    }

    pub fn alpha(&self) -> f64 {
        self.alpha.value()
    }

    pub fn has_target(&self) -> bool {
        self.current.is_some()
    }

    pub fn target_phase(&self) -> Option<TargetPhase> {
        self.current.as_ref().map(|c| c.phase)
    }

    pub fn shape_timeline(&self) -> Option<&Timeline> {
        self.current.as_ref().map(|c| &c.shape_tl)
    }

    pub fn effect_timeline(&self) -> Option<&Timeline> {
        self.current.as_ref().and_then(|c| c.effect_tl.as_ref())
    }

    pub fn text_timeline(&self) -> Option<&Timeline> {
        self.current.as_ref().and_then(|c| c.text_tl.as_ref())
    }

    pub fn bubble(&self) -> Option<&BubbleLayout> {
        self.current.as_ref().and_then(|c| c.bubble.as_ref())
    }

    /// Fade the whole view in from its current alpha.
    pub fn start_spotlight(&mut self, duration: Duration, ease: Ease) {
        self.alpha = Timeline::once(self.alpha.value(), 1.0, duration, ease);
    }

    /// Fade the whole view out from its current alpha.
    pub fn finish_spotlight(&mut self, duration: Duration, ease: Ease) {
        self.alpha = Timeline::once(self.alpha.value(), 0.0, duration, ease);
    }

    /// Install `target` and start growing its hole. The previous target, if any, is dropped
    /// and its effect cancelled first.
    pub fn start_target(&mut self, target: &Target) {
        if let Some(mut prev) = self.current.take()
            && let Some(tl) = prev.effect_tl.as_mut()
        {
            tl.cancel();
        }
        self.current = Some(TargetSnapshot::enter(
            target,
            self.viewport,
            self.metrics.as_ref(),
        ));
    }

    /// Shrink the current hole from its current size. Returns `false` without a target.
    pub fn finish_target(&mut self) -> bool {
        match self.current.as_mut() {
            Some(cur) => {
                cur.exit();
                true
            }
            None => false,
        }
    }

    /// Forget the current target snapshot.
    pub fn clear_target(&mut self) {
        if let Some(mut prev) = self.current.take()
            && let Some(tl) = prev.effect_tl.as_mut()
        {
            tl.cancel();
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.relayout();
    }

    fn relayout(&mut self) {
        if let Some(cur) = self.current.as_mut() {
            cur.relayout(self.viewport, self.metrics.as_ref());
        }
    }

    /// Tick every timeline by `dt` and report what completed.
    pub fn advance(&mut self, dt: Duration) -> Vec<ViewEvent> {
        let mut events = Vec::new();

        if self.alpha.tick(dt) == TickEvent::Completed {
            events.push(if self.alpha.to() > 0.0 {
                ViewEvent::FadeInCompleted
            } else {
                ViewEvent::FadeOutCompleted
            });
        }

        if let Some(cur) = self.current.as_mut() {
            let shape_done = cur.shape_tl.tick(dt) == TickEvent::Completed;
            if let Some(tl) = cur.effect_tl.as_mut() {
                tl.tick(dt);
            }
            if let Some(tl) = cur.text_tl.as_mut() {
                tl.tick(dt);
            }
            if shape_done {
                match cur.phase {
                    TargetPhase::Entering => {
                        cur.phase = TargetPhase::Active;
                        events.push(ViewEvent::TargetEntered);
                    }
                    TargetPhase::Exiting => events.push(ViewEvent::TargetExited),
                    TargetPhase::Active => {}
                }
            }
        }

        events
    }

    /// Any timeline still moving.
    pub fn is_animating(&self) -> bool {
        self.alpha.is_running() || self.current.as_ref().is_some_and(TargetSnapshot::is_animating)
    }

    pub fn frame_values(&self) -> FrameValues {
        let cur = self.current.as_ref();
        FrameValues {
            alpha: self.alpha.value(),
            shape: cur.map_or(0.0, |c| c.shape_tl.value()),
            effect: cur
                .and_then(|c| c.effect_tl.as_ref())
                .filter(|tl| tl.is_running())
                .map(Timeline::value),
            text: cur.and_then(|c| c.text_tl.as_ref()).map_or(0.0, Timeline::value),
        }
    }

    /// Overlay control under `point`, if any.
    pub fn hit_test(&self, point: Point) -> Option<OverlayAction> {
        self.current
            .as_ref()
            .and_then(|c| c.overlay.as_ref())
            .and_then(|o| o.hit_test(point))
    }

    /// Paint one frame: dim layer, effect, hole, overlay, bubble.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let v = self.frame_values();
        surface.begin_frame();

        let full = Rect::from_origin_size(Point::ZERO, surface.size());
        surface.fill_rect(full, self.background.scale_alpha(v.alpha));

        if let Some(cur) = self.current.as_ref() {
            if let Some((region, paint)) = v
                .effect
                .and_then(|p| cur.effect.draw_spec(cur.anchor, p))
            {
                surface.draw_region(&region, &paint.scale_alpha(v.alpha));
            }

            surface.clear_region(&cur.shape.geometry(cur.anchor, v.shape));

            if let Some(overlay) = cur.overlay.as_ref() {
                overlay.draw(surface, self.viewport, v.alpha);
            }

            if let Some(bubble) = cur.bubble.as_ref() {
                let a = v.text * v.alpha;
                if a > 0.0 {
                    surface.draw_text_block(bubble.rect, &bubble.block, &self.text_style, a);
                }
            }
        }

        if self.is_animating() {
            surface.invalidate();
        }
    }
}

impl std::fmt::Debug for SpotlightView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotlightView")
            .field("viewport", &self.viewport)
            .field("background", &self.background)
            .field("alpha", &self.alpha)
            .field("phase", &self.target_phase())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/spotlight_view.rs"]
mod tests;
