use std::{
    cell::Cell,
    time::{Duration, Instant},
};

/// Monotonic time source. Hosts use [`MonotonicClock`]; tests inject [`ManualClock`].
pub trait Clock {
    /// Time since an arbitrary, fixed origin.
    fn now(&self) -> Duration;
}

#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Turns successive clock readings into per-frame deltas.
///
/// The first call to [`FrameTicker::tick`] yields a zero delta; a clock that goes backwards
/// also yields zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameTicker {
    last: Option<Duration>,
}

impl FrameTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, clock: &dyn Clock) -> Duration {
        let now = clock.now();
        let dt = match self.last {
            Some(last) => now.saturating_sub(last),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        dt
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
