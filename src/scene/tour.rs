use std::{fs::File, io::BufReader, path::Path, rc::Rc, time::Duration};

use crate::{
    animation::clock::{Clock, FrameTicker},
    effects::effect::{Effect, EffectKind},
    foundation::core::{BezPath, Point, Rect, Rgba8, Size, Viewport},
    foundation::error::{SpotlightError, SpotlightResult},
    geometry::shape::{Shape, ShapeKind},
    render::{cpu::CpuSurface, frame::FrameRGBA, surface::DrawSurface},
    scene::model::{
        ActionDef, EffectDef, EffectKindDef, ShapeDef, ShapeKindDef, TargetDef, TourDef,
    },
    spotlight::{Spotlight, SpotlightBuilder, SpotlightState},
    target::{
        model::{Target, TargetBuilder},
        overlay::{ControlOverlay, OverlayControl},
    },
};

/// Playback time after the last script step when no explicit duration is given.
pub const DEFAULT_TAIL: Duration = Duration::from_millis(3000);
pub const DEFAULT_BACKDROP: Rgba8 = Rgba8::new(0xF2, 0xF2, 0xF2, 0xFF);
/// Color of the stand-in host widgets painted on the backdrop.
pub const HOST_WIDGET: Rgba8 = Rgba8::new(0x3F, 0x51, 0xB5, 0xFF);

/// A scripted action replayed by [`TourPlayer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TourAction {
    Next,
    Previous,
    Finish,
    Show(usize),
    Tap(Point),
    Resize(Size),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptStep {
    pub at: Duration,
    pub action: TourAction,
}

/// JSON-facing description of a spotlight tour: viewport, look, targets and a timed script.
///
/// ```json
/// {
///   "viewport": { "width": 400, "height": 800 },
///   "fade_ms": 400,
///   "targets": [
///     { "rect": { "x": 30, "y": 30, "width": 40, "height": 40 }, "text": "Menu",
///       "effect": { "kind": "ripple", "offset": 40, "radius": 80, "color": "#FFFFFF80" } }
///   ],
///   "script": [ { "at_ms": 2000, "op": "next" } ]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Tour {
    def: TourDef,
}

impl Tour {
    /// Parse a tour from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SpotlightResult<Self> {
        let def: TourDef = serde_json::from_reader(r)
            .map_err(|e| SpotlightError::serde(format!("parse tour JSON: {e}")))?;
        Ok(Self { def })
    }

    pub fn from_json_str(s: &str) -> SpotlightResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a tour from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SpotlightResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SpotlightError::validation(format!("open tour JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> SpotlightResult<String> {
        Ok(serde_json::to_string_pretty(&self.def)?)
    }

    pub fn viewport(&self) -> Viewport {
        self.def.viewport.to_size()
    }

    pub fn target_count(&self) -> usize {
        self.def.targets.len()
    }

    pub fn backdrop(&self) -> Rgba8 {
        self.def.backdrop.map_or(DEFAULT_BACKDROP, |c| c.0)
    }

    /// Playback length: explicit `duration_ms`, or the last step plus [`DEFAULT_TAIL`].
    pub fn duration(&self) -> Duration {
        match self.def.duration_ms {
            Some(ms) => Duration::from_millis(ms),
            None => {
                let last = self.def.script.iter().map(|s| s.at_ms).max().unwrap_or(0);
                Duration::from_millis(last) + DEFAULT_TAIL
            }
        }
    }

    pub fn script(&self) -> Vec<ScriptStep> {
        self.def
            .script
            .iter()
            .map(|s| ScriptStep {
                at: Duration::from_millis(s.at_ms),
                action: match s.action {
                    ActionDef::Next => TourAction::Next,
                    ActionDef::Previous => TourAction::Previous,
                    ActionDef::Finish => TourAction::Finish,
                    ActionDef::Show { index } => TourAction::Show(index),
                    ActionDef::Tap { x, y } => TourAction::Tap(Point::new(x, y)),
                    ActionDef::Resize { width, height } => {
                        TourAction::Resize(Size::new(width, height))
                    }
                },
            })
            .collect()
    }

    /// Check the tour without building listeners or surfaces.
    pub fn validate(&self) -> SpotlightResult<()> {
        let vp = self.viewport();
        if !(vp.width.is_finite() && vp.height.is_finite() && vp.width > 0.0 && vp.height > 0.0)
        {
            return Err(SpotlightError::validation(format!(
                "viewport must be positive and finite, got {}x{}",
                vp.width, vp.height
            )));
        }
        if let Some(ease) = self.def.ease
            && !ease.is_valid()
        {
            return Err(SpotlightError::validation(format!(
                "tour ease is invalid: {ease:?}"
            )));
        }

        for (i, t) in self.def.targets.iter().enumerate() {
            build_target(t)
                .map_err(|e| SpotlightError::validation(format!("targets[{i}]: {e}")))?;
        }

        let mut last = 0;
        for (i, step) in self.def.script.iter().enumerate() {
            if step.at_ms < last {
                return Err(SpotlightError::validation(format!(
                    "script[{i}]: at_ms {} is earlier than the previous step ({last})",
                    step.at_ms
                )));
            }
            last = step.at_ms;
            match step.action {
                ActionDef::Show { index } if index >= self.def.targets.len() => {
                    return Err(SpotlightError::validation(format!(
                        "script[{i}]: show index {index} out of range (targets: {})",
                        self.def.targets.len()
                    )));
                }
                ActionDef::Tap { x, y } if !(x.is_finite() && y.is_finite()) => {
                    return Err(SpotlightError::validation(format!(
                        "script[{i}]: tap position must be finite"
                    )));
                }
                ActionDef::Resize { width, height }
                    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) =>
                {
                    return Err(SpotlightError::validation(format!(
                        "script[{i}]: resize must be positive and finite"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Validate and turn the tour into a ready-to-start [`Spotlight`].
    #[tracing::instrument(skip(self), fields(targets = self.def.targets.len()))]
    pub fn build_spotlight(&self) -> SpotlightResult<Spotlight> {
        self.validate()?;

        let targets = self
            .def
            .targets
            .iter()
            .map(build_target)
            .collect::<SpotlightResult<Vec<_>>>()?;

        let mut builder = SpotlightBuilder::new(self.viewport()).set_targets(targets);
        if let Some(c) = self.def.background {
            builder = builder.set_background_color(c.0);
        }
        if let Some(ms) = self.def.fade_ms {
            builder = builder.set_duration(Duration::from_millis(ms));
        }
        if let Some(ease) = self.def.ease {
            builder = builder.set_animation(ease);
        }
        builder.build()
    }

    /// Stand-in host UI: the backdrop color with every target's element painted on it.
    pub fn render_backdrop(&self) -> SpotlightResult<FrameRGBA> {
        let (w, h) = pixel_size(self.viewport())?;
        let mut host = CpuSurface::new(w, h)?;
        host.fill_rect(
            Rect::from_origin_size(Point::ZERO, self.viewport()),
            self.backdrop(),
        );
        for t in &self.def.targets {
            if let Some(bounds) = element_bounds(t) {
                host.fill_rect(bounds, HOST_WIDGET);
            }
        }
        Ok(host.layer())
    }
}

/// Integer surface size for a viewport.
pub fn pixel_size(viewport: Viewport) -> SpotlightResult<(u32, u32)> {
    let to_px = |v: f64, what: &str| -> SpotlightResult<u32> {
        if v.is_finite() && v >= 1.0 && v <= f64::from(u16::MAX) {
            Ok(v.ceil() as u32)
        } else {
            Err(SpotlightError::render(format!(
                "viewport {what} {v} cannot be rasterized"
            )))
        }
    };
    Ok((to_px(viewport.width, "width")?, to_px(viewport.height, "height")?))
}

fn element_bounds(t: &TargetDef) -> Option<Rect> {
    if let Some(r) = t.rect {
        return Some(r.to_rect());
    }
    let anchor = t.anchor?.to_point();
    let size = t.size?.to_size();
    Some(Rect::from_center_size(anchor, size))
}

fn build_target(t: &TargetDef) -> SpotlightResult<Target> {
    let mut b = TargetBuilder::new().set_shape_policy(t.shape_policy);

    match (t.rect, t.anchor) {
        (Some(_), Some(_)) => {
            return Err(SpotlightError::validation(
                "give either `rect` or `anchor`, not both",
            ));
        }
        (Some(r), None) => b = b.set_view(&r.to_rect()),
        (None, Some(a)) => b = b.set_anchor(a.to_point()),
        (None, None) => {}
    }
    if let Some(size) = t.size {
        b = b.set_size(size.width, size.height);
    }
    if let Some(text) = &t.text {
        b = b.set_text(text.as_str());
    }
    if let Some(shape) = &t.shape {
        b = b.set_shape(build_shape(shape)?);
    }
    if let Some(effect) = &t.effect {
        b = b.set_effect(build_effect(effect));
    }
    if !t.controls.is_empty() {
        let overlay: ControlOverlay = t
            .controls
            .iter()
            .map(|c| OverlayControl {
                rect: c.rect.to_rect(),
                action: c.action,
                color: c.color.0,
            })
            .collect();
        b = b.set_overlay(Rc::new(overlay));
    }
    b.build()
}

fn build_shape(def: &ShapeDef) -> SpotlightResult<Shape> {
    let kind = match &def.kind {
        ShapeKindDef::Circle { radius } => ShapeKind::Circle { radius: *radius },
        ShapeKindDef::RoundedRectangle {
            width,
            height,
            radius,
        } => ShapeKind::RoundedRectangle {
            width: *width,
            height: *height,
            radius: *radius,
        },
        ShapeKindDef::Custom { path } => ShapeKind::Custom {
            path: BezPath::from_svg(path)
                .map_err(|e| SpotlightError::validation(format!("custom shape path: {e}")))?,
        },
    };
    let mut shape = Shape::new(kind);
    if let Some(ms) = def.duration_ms {
        shape = shape.with_duration(Duration::from_millis(ms));
    }
    if let Some(ease) = def.ease {
        shape = shape.with_ease(ease);
    }
    Ok(shape)
}

fn build_effect(def: &EffectDef) -> Effect {
    let mut effect = match def.kind {
        EffectKindDef::Empty => Effect::empty(),
        EffectKindDef::Ripple {
            offset,
            radius,
            color,
        } => Effect::ripple(offset, radius, color.0),
        EffectKindDef::Flicker { radius, color } => Effect::flicker(radius, color.0),
    };
    if matches!(effect.kind, EffectKind::Empty) {
        return effect;
    }
    if let Some(ms) = def.duration_ms {
        effect = effect.with_duration(Duration::from_millis(ms));
    }
    if let Some(ease) = def.ease {
        effect = effect.with_ease(ease);
    }
    if let Some(mode) = def.repeat_mode {
        effect = effect.with_repeat_mode(mode);
    }
    effect
}

/// Replays a [`Tour`] script against a [`Spotlight`], one frame at a time.
#[derive(Debug)]
pub struct TourPlayer {
    spotlight: Spotlight,
    script: Vec<ScriptStep>,
    cursor: usize,
    now: Duration,
    ticker: FrameTicker,
}

impl TourPlayer {
    /// Build the spotlight and start it at time zero.
    pub fn new(tour: &Tour) -> SpotlightResult<Self> {
        let mut spotlight = tour.build_spotlight()?;
        spotlight.start();
        Ok(Self {
            spotlight,
            script: tour.script(),
            cursor: 0,
            now: Duration::ZERO,
            ticker: FrameTicker::new(),
        })
    }

    pub fn spotlight(&self) -> &Spotlight {
        &self.spotlight
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// No script left and the spotlight is back to idle.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.script.len() && self.spotlight.state() == SpotlightState::Idle
    }

    /// Advance animations by `dt`, then run every script step that became due.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
        self.spotlight.advance(dt);
        while let Some(step) = self.script.get(self.cursor).copied() {
            if step.at > self.now {
                break;
            }
            self.cursor += 1;
            tracing::debug!(at = ?step.at, action = ?step.action, "script step");
            match step.action {
                TourAction::Next => self.spotlight.next(),
                TourAction::Previous => self.spotlight.previous(),
                TourAction::Finish => self.spotlight.finish(),
                TourAction::Show(i) => self.spotlight.show(i),
                TourAction::Tap(p) => self.spotlight.tap(p),
                TourAction::Resize(vp) => self.spotlight.resize(vp),
            }
        }
    }

    /// Advance by however much `clock` moved since the previous call.
    pub fn tick(&mut self, clock: &dyn Clock) {
        let dt = self.ticker.tick(clock);
        self.advance(dt);
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        self.spotlight.draw(surface);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/tour.rs"]
mod tests;
