use std::time::Duration;

use crate::{
    animation::{ease::Ease, timeline::RepeatMode},
    foundation::core::{Point, Rgba8, clamp_progress},
    foundation::error::{SpotlightError, SpotlightResult},
    geometry::region::Geometry,
    render::surface::Paint,
};

/// Decoration variants drawn at the anchor, independent of the hole.
#[derive(Clone, Debug, PartialEq)]
pub enum EffectKind {
    Empty,
    /// Filled circle expanding from `offset` to `radius` while fading out.
    Ripple { offset: f64, radius: f64, color: Rgba8 },
    /// Filled circle of fixed `radius` whose alpha follows progress.
    Flicker { radius: f64, color: Rgba8 },
}

/// Looping decoration with its own timing.
#[derive(Clone, Debug, PartialEq)]
pub struct Effect {
    pub kind: EffectKind,
    pub duration: Duration,
    pub ease: Ease,
    pub repeat_mode: RepeatMode,
}

impl Effect {
    pub fn empty() -> Self {
        Self {
            kind: EffectKind::Empty,
            duration: Duration::ZERO,
            ease: Ease::Linear,
            repeat_mode: RepeatMode::Restart,
        }
    }

    pub fn ripple(offset: f64, radius: f64, color: Rgba8) -> Self {
        Self {
            kind: EffectKind::Ripple {
                offset,
                radius,
                color,
            },
            duration: Duration::from_millis(1000),
            ease: Ease::Decelerate(1.0),
            repeat_mode: RepeatMode::Restart,
        }
    }

    pub fn flicker(radius: f64, color: Rgba8) -> Self {
        Self {
            kind: EffectKind::Flicker { radius, color },
            duration: Duration::from_millis(1000),
            ease: Ease::Linear,
            repeat_mode: RepeatMode::Reverse,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_repeat_mode(mut self, mode: RepeatMode) -> Self {
        self.repeat_mode = mode;
        self
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, EffectKind::Empty)
    }

    /// What to paint at `progress`, or `None` when nothing is visible.
    pub fn draw_spec(&self, anchor: Point, progress: f64) -> Option<(Geometry, Paint)> {
        let p = clamp_progress(progress);
        let (radius, color) = match self.kind {
            EffectKind::Empty => return None,
            EffectKind::Ripple {
                offset,
                radius,
                color,
            } => (offset + (radius - offset) * p, color.scale_alpha(1.0 - p)),
            EffectKind::Flicker { radius, color } => (radius, color.scale_alpha(p)),
        };
        if radius <= 0.0 || color.a == 0 {
            return None;
        }
        Some((
            Geometry::Circle(kurbo::Circle::new(anchor, radius)),
            Paint::fill(color),
        ))
    }

    pub fn validate(&self) -> SpotlightResult<()> {
        match self.kind {
            EffectKind::Empty => {}
            EffectKind::Ripple { offset, radius, .. } => {
                if !offset.is_finite() || !radius.is_finite() || offset < 0.0 {
                    return Err(SpotlightError::validation(
                        "ripple offset/radius must be finite and >= 0",
                    ));
                }
                if offset >= radius {
                    return Err(SpotlightError::validation(
                        "ripple offset must be smaller than its radius",
                    ));
                }
            }
            EffectKind::Flicker { radius, .. } => {
                if !radius.is_finite() || radius < 0.0 {
                    return Err(SpotlightError::validation(
                        "flicker radius must be finite and >= 0",
                    ));
                }
            }
        }
        if !self.ease.is_valid() {
            return Err(SpotlightError::validation(format!(
                "effect ease is invalid: {:?}",
                self.ease
            )));
        }
        Ok(())
    }
}

impl Default for Effect {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/effect.rs"]
mod tests;
