use std::time::Duration;

use crate::{
    animation::ease::Ease,
    foundation::error::{SpotlightError, SpotlightResult},
};

/// What a looping timeline does after reaching its end value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// Jump back to the start value and run forward again.
    #[default]
    Restart,
    /// Run back toward the start value, then forward again (ping-pong).
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineState {
    Running,
    Completed,
    Canceled,
}

/// Outcome of a single [`Timeline::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    /// The timeline is not running; nothing changed.
    Idle,
    Progressed,
    /// A looping timeline crossed at least one cycle boundary.
    Repeated,
    /// A one-shot timeline reached its end value.
    Completed,
}

/// Explicit, host-agnostic animation timeline advanced by [`Timeline::tick`].
///
/// Values are `from + (to - from) * ease(fraction)`. For [`RepeatMode::Reverse`] the fraction
/// runs backwards on odd cycles, so the ease is applied to the mirrored fraction.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    from: f64,
    to: f64,
    duration: Duration,
    ease: Ease,
    repeat: Option<RepeatMode>,
    elapsed: Duration,
    state: TimelineState,
}

impl Timeline {
    /// One-shot timeline from `from` to `to`.
    pub fn once(from: f64, to: f64, duration: Duration, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            ease,
            repeat: None,
            elapsed: Duration::ZERO,
            state: TimelineState::Running,
        }
    }

    /// Infinitely repeating timeline.
    pub fn looping(from: f64, to: f64, duration: Duration, ease: Ease, mode: RepeatMode) -> Self {
        Self {
            repeat: Some(mode),
            ..Self::once(from, to, duration, ease)
        }
    }

    /// A timeline that has already settled at `value`; ticking it reports [`TickEvent::Idle`].
    pub fn settled(value: f64) -> Self {
        Self {
            state: TimelineState::Completed,
            ..Self::once(value, value, Duration::ZERO, Ease::Linear)
        }
    }

    /// Validating constructor for externally supplied parameters.
    pub fn try_once(from: f64, to: f64, duration: Duration, ease: Ease) -> SpotlightResult<Self> {
        if !from.is_finite() || !to.is_finite() {
            return Err(SpotlightError::animation(
                "timeline endpoints must be finite",
            ));
        }
        if !ease.is_valid() {
            return Err(SpotlightError::animation(format!(
                "invalid ease parameters: {ease:?}"
            )));
        }
        Ok(Self::once(from, to, duration, ease))
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn repeat_mode(&self) -> Option<RepeatMode> {
        self.repeat
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimelineState::Running
    }

    /// Stop the timeline; its value stays frozen where it was.
    pub fn cancel(&mut self) {
        if self.state == TimelineState::Running {
            self.state = TimelineState::Canceled;
        }
    }

    /// Number of completed cycles for looping timelines (always 0 for one-shot).
    pub fn cycle(&self) -> u128 {
        match self.repeat {
            Some(_) if !self.duration.is_zero() => {
                self.elapsed.as_nanos() / self.duration.as_nanos()
            }
            _ => 0,
        }
    }

    /// Un-eased position in `[0, 1]` along the current pass.
    pub fn fraction(&self) -> f64 {
        if self.duration.is_zero() {
            return match self.repeat {
                Some(_) => 0.0,
                None => 1.0,
            };
        }
        let dur = self.duration.as_nanos();
        let el = self.elapsed.as_nanos();
        match self.repeat {
            None => (el.min(dur) as f64) / (dur as f64),
            Some(mode) => {
                let pos = ((el % dur) as f64) / (dur as f64);
                let odd_cycle = (el / dur) % 2 == 1;
                match mode {
                    RepeatMode::Restart => pos,
                    RepeatMode::Reverse if odd_cycle => 1.0 - pos,
                    RepeatMode::Reverse => pos,
                }
            }
        }
    }

    /// Current animated value.
    pub fn value(&self) -> f64 {
        let p = self.ease.apply(self.fraction());
        self.from + (self.to - self.from) * p
    }

    /// Advance by `dt`.
    pub fn tick(&mut self, dt: Duration) -> TickEvent {
        if self.state != TimelineState::Running {
            return TickEvent::Idle;
        }

        match self.repeat {
            None => {
                self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
                if self.elapsed >= self.duration {
                    self.state = TimelineState::Completed;
                    TickEvent::Completed
                } else {
                    TickEvent::Progressed
                }
            }
            Some(_) => {
                if self.duration.is_zero() {
                    return TickEvent::Progressed;
                }
                let before = self.cycle();
                self.elapsed = self.elapsed.saturating_add(dt);
                if self.cycle() > before {
                    TickEvent::Repeated
                } else {
                    TickEvent::Progressed
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
