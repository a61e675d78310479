use std::time::Duration;

use crate::{
    animation::ease::Ease,
    foundation::core::{Point, Viewport},
    render::surface::DrawSurface,
    spotlight::{
        builder::SpotlightBuilder,
        control::{Command, Control},
        listener::SpotlightListener,
    },
    target::{model::Target, overlay::OverlayAction},
    view::{SpotlightView, ViewEvent},
};

/// Where the current target is inside [`SpotlightState::Running`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Entering,
    Active,
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpotlightState {
    Idle,
    /// Whole view fading in; no target yet.
    Starting,
    Running {
        index: usize,
        stage: Stage,
    },
    /// Whole view fading out after the last exit.
    Finishing,
}

/// What happens once the exiting target is gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Destination {
    Enter(usize),
    Finish,
}

/// Drives a queue of targets through fade-in, per-target enter/exit and fade-out.
///
/// Time only moves through [`Spotlight::advance`]. Commands never fail: requests that make
/// no sense in the current state are ignored (with a `tracing` event).
pub struct Spotlight {
    targets: Vec<Target>,
    view: SpotlightView,
    duration: Duration,
    ease: Ease,
    listener: SpotlightListener,
    state: SpotlightState,
    pending: Option<Destination>,
}

impl Spotlight {
    pub fn builder(viewport: Viewport) -> SpotlightBuilder {
        SpotlightBuilder::new(viewport)
    }

    pub(crate) fn new(
        targets: Vec<Target>,
        view: SpotlightView,
        duration: Duration,
        ease: Ease,
        listener: SpotlightListener,
    ) -> Self {
        Self {
            targets,
            view,
            duration,
            ease,
            listener,
            state: SpotlightState::Idle,
            pending: None,
        }
    }

    pub fn state(&self) -> SpotlightState {
        self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SpotlightState::Running { index, .. } => Some(index),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn view(&self) -> &SpotlightView {
        &self.view
    }

    pub fn is_animating(&self) -> bool {
        self.view.is_animating()
    }

    /// Fade the overlay in, then enter the first target.
    ///
    /// Does nothing when the queue is empty (including after a finished run, which releases
    /// the queue) or when a run is already in progress.
    pub fn start(&mut self) {
        if self.state != SpotlightState::Idle {
            tracing::warn!(state = ?self.state, "start ignored: spotlight already running");
            return;
        }
        if self.targets.is_empty() {
            tracing::debug!("start ignored: no targets");
            return;
        }
        tracing::debug!(targets = self.targets.len(), "spotlight starting");
        self.state = SpotlightState::Starting;
        self.listener.started();
        self.view.start_spotlight(self.duration, self.ease);
    }

    /// Move to the next target, or finish after the last one.
    pub fn next(&mut self) {
        self.request(Command::Next);
    }

    /// Move to the previous target. No-op at the first target.
    pub fn previous(&mut self) {
        self.request(Command::Previous);
    }

    /// Jump to the target at `index`.
    pub fn show(&mut self, index: usize) {
        self.request(Command::Show { index });
    }

    /// Exit the current target and fade the overlay out.
    pub fn finish(&mut self) {
        self.request(Command::Finish);
    }

    /// Apply one command according to the current state.
    #[tracing::instrument(skip(self), fields(state = ?self.state))]
    pub fn request(&mut self, command: Command) {
        match self.state {
            SpotlightState::Idle => {
                tracing::warn!("ignored: spotlight is not running");
            }
            SpotlightState::Finishing => {
                tracing::debug!("ignored: spotlight is finishing");
            }
            SpotlightState::Starting => {
                if command == Command::Finish {
                    tracing::debug!("reversing fade-in");
                    self.state = SpotlightState::Finishing;
                    self.view.finish_spotlight(self.duration, self.ease);
                } else {
                    tracing::debug!("ignored: no target entered yet");
                }
            }
            SpotlightState::Running { index, stage } => {
                if self.pending == Some(Destination::Finish) {
                    tracing::debug!("ignored: finish already requested");
                    return;
                }
                // Requests made while exiting queue up behind the pending destination.
                let base = match self.pending {
                    Some(Destination::Enter(to)) => to,
                    _ => index,
                };
                let Some(dest) = self.destination(base, command) else {
                    return;
                };
                match stage {
                    Stage::Entering | Stage::Active => {
                        tracing::debug!(index, ?dest, "target exiting");
                        self.view.finish_target();
                        self.state = SpotlightState::Running {
                            index,
                            stage: Stage::Exiting,
                        };
                    }
                    Stage::Exiting => {
                        tracing::debug!(index, ?dest, "pending destination updated");
                    }
                }
                self.pending = Some(dest);
            }
        }
    }

    fn destination(&self, index: usize, command: Command) -> Option<Destination> {
        let len = self.targets.len();
        match command {
            Command::Next if index + 1 >= len => Some(Destination::Finish),
            Command::Next => Some(Destination::Enter(index + 1)),
            Command::Previous if index == 0 => {
                tracing::debug!("previous ignored: already at the first target");
                None
            }
            Command::Previous => Some(Destination::Enter(index - 1)),
            Command::Finish => Some(Destination::Finish),
            Command::Show { index: to } if to >= len => {
                tracing::warn!(to, len, "show ignored: index out of range");
                None
            }
            Command::Show { index: to } => Some(Destination::Enter(to)),
        }
    }

    /// Handle a tap at `point` (surface coordinates).
    ///
    /// Overlay controls take precedence; any other tap goes to the current target's
    /// `on_clicked` callback, whose [`Control`] requests are applied afterwards.
    #[tracing::instrument(skip(self))]
    pub fn tap(&mut self, point: Point) {
        let SpotlightState::Running { index, .. } = self.state else {
            tracing::debug!(state = ?self.state, "tap ignored");
            return;
        };
        match self.view.hit_test(point) {
            Some(OverlayAction::Next) => self.next(),
            Some(OverlayAction::Previous) => self.previous(),
            Some(OverlayAction::Finish) => self.finish(),
            Some(OverlayAction::Click) | None => self.click(index),
        }
    }

    fn click(&mut self, index: usize) {
        let mut control = Control::default();
        if let Some(listener) = self.targets.get_mut(index).and_then(Target::listener_mut) {
            listener.clicked(&mut control);
        }
        for command in control.into_commands() {
            self.request(command);
        }
    }

    /// Advance all animations by `dt`; completions move the sequence forward.
    pub fn advance(&mut self, dt: Duration) {
        for event in self.view.advance(dt) {
            self.on_view_event(event);
        }
    }

    fn on_view_event(&mut self, event: ViewEvent) {
        match (event, self.state) {
            (ViewEvent::FadeInCompleted, SpotlightState::Starting) => self.enter(0),
            (
                ViewEvent::TargetEntered,
                SpotlightState::Running {
                    index,
                    stage: Stage::Entering,
                },
            ) => {
                tracing::debug!(index, "target active");
                self.state = SpotlightState::Running {
                    index,
                    stage: Stage::Active,
                };
            }
            (
                ViewEvent::TargetExited,
                SpotlightState::Running {
                    index,
                    stage: Stage::Exiting,
                },
            ) => {
                tracing::debug!(index, "target exited");
                if let Some(listener) = self.targets.get_mut(index).and_then(Target::listener_mut)
                {
                    listener.ended();
                }
                match self.pending.take() {
                    Some(Destination::Enter(next)) => self.enter(next),
                    Some(Destination::Finish) | None => {
                        tracing::debug!("spotlight finishing");
                        self.state = SpotlightState::Finishing;
                        self.view.finish_spotlight(self.duration, self.ease);
                    }
                }
            }
            (ViewEvent::FadeOutCompleted, SpotlightState::Finishing) => self.end(),
            (event, state) => {
                tracing::debug!(?event, ?state, "view event without transition");
            }
        }
    }

    fn enter(&mut self, index: usize) {
        let Some(target) = self.targets.get_mut(index) else {
            tracing::warn!(index, "enter ignored: index out of range");
            return;
        };
        tracing::debug!(index, "target entering");
        self.view.start_target(target);
        self.state = SpotlightState::Running {
            index,
            stage: Stage::Entering,
        };
        if let Some(listener) = target.listener_mut() {
            listener.started();
        }
    }

    fn end(&mut self) {
        tracing::debug!("spotlight ended");
        self.view.clear_target();
        self.state = SpotlightState::Idle;
        self.pending = None;
        self.targets.clear();
        self.listener.ended();
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        self.view.draw(surface);
    }

    /// The host viewport changed; text is laid out again.
    pub fn resize(&mut self, viewport: Viewport) {
        self.view.resize(viewport);
    }
}

impl std::fmt::Debug for Spotlight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spotlight")
            .field("targets", &self.targets.len())
            .field("state", &self.state)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spotlight/sequence.rs"]
mod tests;
