use std::rc::Rc;

use crate::{
    animation::{ease::Ease, timeline::Timeline},
    effects::effect::Effect,
    foundation::core::{Point, Size, Viewport},
    geometry::shape::Shape,
    layout::bubble::{BubbleLayout, TextMetrics, layout_bubble},
    target::{model::Target, overlay::OverlayView},
};

/// Ease of the bubble text fade in both directions, independent of the shape.
pub(crate) const TEXT_FADE_EASE: Ease = Ease::AccelerateDecelerate;

/// Where the current target is in its own enter/exit cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetPhase {
    Entering,
    Active,
    Exiting,
}

/// Render-time copy of the current target plus its timelines.
pub(crate) struct TargetSnapshot {
    pub(crate) anchor: Point,
    pub(crate) size: Size,
    pub(crate) text: Option<String>,
    pub(crate) shape: Shape,
    pub(crate) effect: Effect,
    pub(crate) overlay: Option<Rc<dyn OverlayView>>,
    pub(crate) bubble: Option<BubbleLayout>,
    pub(crate) phase: TargetPhase,
    pub(crate) shape_tl: Timeline,
    pub(crate) effect_tl: Option<Timeline>,
    pub(crate) text_tl: Option<Timeline>,
}

impl TargetSnapshot {
    pub(crate) fn enter(target: &Target, viewport: Viewport, metrics: &dyn TextMetrics) -> Self {
        let shape = target.shape().clone();
        let effect = target.effect().clone();
        let text = target.text().map(|t| t.as_str().to_owned());

        let shape_tl = Timeline::once(0.0, 1.0, shape.duration, shape.ease);
        let effect_tl = (!effect.is_empty()).then(|| {
            Timeline::looping(0.0, 1.0, effect.duration, effect.ease, effect.repeat_mode)
        });
        let text_tl = text
            .as_ref()
            .map(|_| Timeline::once(0.0, 1.0, shape.duration, TEXT_FADE_EASE));

        let mut snap = Self {
            anchor: target.anchor(),
            size: target.size(),
            text,
            shape,
            effect,
            overlay: target.overlay().cloned(),
            bubble: None,
            phase: TargetPhase::Entering,
            shape_tl,
            effect_tl,
            text_tl,
        };
        snap.relayout(viewport, metrics);
        snap
    }

    pub(crate) fn relayout(&mut self, viewport: Viewport, metrics: &dyn TextMetrics) {
        self.bubble = self
            .text
            .as_deref()
            .map(|t| layout_bubble(t, self.anchor, self.size, viewport, metrics));
    }

    /// Shrink toward zero from wherever the hole currently is.
    pub(crate) fn exit(&mut self) {
        self.shape_tl = Timeline::once(
            self.shape_tl.value(),
            0.0,
            self.shape.duration,
            self.shape.ease,
        );
        if let Some(tl) = self.effect_tl.as_mut() {
            tl.cancel();
        }
        if let Some(tl) = self.text_tl.as_mut() {
            *tl = Timeline::once(tl.value(), 0.0, self.shape.duration, TEXT_FADE_EASE);
        }
        self.phase = TargetPhase::Exiting;
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.shape_tl.is_running()
            || self.effect_tl.as_ref().is_some_and(Timeline::is_running)
            || self.text_tl.as_ref().is_some_and(Timeline::is_running)
    }
}
