use std::time::Duration;

use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8, Viewport},
    foundation::error::{SpotlightError, SpotlightResult},
    layout::bubble::TextMetrics,
    render::surface::TextStyle,
    spotlight::{listener::SpotlightListener, sequence::Spotlight},
    target::model::Target,
    view::SpotlightView,
};

pub const DEFAULT_BACKGROUND: Rgba8 = Rgba8::new(0, 0, 0, 0xCC);
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(1000);
pub const DEFAULT_FADE_EASE: Ease = Ease::Decelerate(2.0);

/// Builder for [`Spotlight`].
pub struct SpotlightBuilder {
    viewport: Viewport,
    targets: Vec<Target>,
    background: Rgba8,
    duration: Duration,
    ease: Ease,
    listener: Option<SpotlightListener>,
    metrics: Option<Box<dyn TextMetrics>>,
    text_style: TextStyle,
}

impl SpotlightBuilder {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            targets: Vec::new(),
            background: DEFAULT_BACKGROUND,
            duration: DEFAULT_FADE_DURATION,
            ease: DEFAULT_FADE_EASE,
            listener: None,
            metrics: None,
            text_style: TextStyle::default(),
        }
    }

    pub fn set_targets(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    pub fn set_background_color(mut self, color: Rgba8) -> Self {
        self.background = color;
        self
    }

    /// Duration of the whole-view fade in and out.
    pub fn set_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Ease of the whole-view fade in and out.
    pub fn set_animation(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn set_on_spotlight_listener(mut self, listener: SpotlightListener) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn set_text_metrics(mut self, metrics: impl TextMetrics + 'static) -> Self {
        self.metrics = Some(Box::new(metrics));
        self
    }

    pub fn set_text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    pub fn build(self) -> SpotlightResult<Spotlight> {
        let Viewport { width, height } = self.viewport;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(SpotlightError::validation(format!(
                "viewport must be finite and >= 0, got {width}x{height}"
            )));
        }
        if !self.ease.is_valid() {
            return Err(SpotlightError::validation(format!(
                "spotlight animation is invalid: {:?}",
                self.ease
            )));
        }

        let mut view = SpotlightView::new(self.viewport, self.background);
        if let Some(metrics) = self.metrics {
            view.set_text_metrics(metrics);
        }
        view.set_text_style(self.text_style);

        Ok(Spotlight::new(
            self.targets,
            view,
            self.duration,
            self.ease,
            self.listener.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spotlight/builder.rs"]
mod tests;
