//! Animated spotlight tours for any 2D host UI.
//!
//! A [`Spotlight`] dims the screen, punches an animated hole around one [`Target`] at a time,
//! shows explanatory text next to it and walks through the queue on request. Hosts drive it
//! by calling [`Spotlight::advance`] with elapsed time and [`Spotlight::draw`] with a
//! [`DrawSurface`]; taps go to [`Spotlight::tap`].
//!
//! - Build targets with [`TargetBuilder`], the sequence with [`SpotlightBuilder`]
//! - Draw into any [`DrawSurface`], e.g. the bundled [`CpuSurface`]
//! - Describe whole tours as JSON with [`Tour`] and replay them with [`TourPlayer`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod effects;
pub mod foundation;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod scene;
pub mod spotlight;
pub mod target;
pub mod view;

pub use crate::animation::clock::{Clock, FrameTicker, ManualClock, MonotonicClock};
pub use crate::animation::ease::Ease;
pub use crate::animation::timeline::{RepeatMode, TickEvent, Timeline, TimelineState};
pub use crate::effects::effect::{Effect, EffectKind};
pub use crate::foundation::core::{BezPath, Point, Rect, Rgba8, Size, Vec2, Viewport};
pub use crate::foundation::error::{SpotlightError, SpotlightResult};
pub use crate::geometry::region::Geometry;
pub use crate::geometry::shape::{Shape, ShapeKind};
pub use crate::layout::bubble::{
    BubbleLayout, BubbleSide, MonospaceMetrics, TextBlock, TextMetrics,
};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::frame::FrameRGBA;
pub use crate::render::surface::{DrawCommand, DrawSurface, Paint, RecordingSurface, TextStyle};
pub use crate::scene::tour::{ScriptStep, Tour, TourAction, TourPlayer};
pub use crate::spotlight::{
    Command, Control, Spotlight, SpotlightBuilder, SpotlightListener, SpotlightState, Stage,
};
pub use crate::target::element::UiElement;
pub use crate::target::listener::TargetListener;
pub use crate::target::model::{ShapePolicy, Target, TargetBuilder, Text};
pub use crate::target::overlay::{ControlOverlay, OverlayAction, OverlayControl, OverlayView};
pub use crate::view::{SpotlightView, TargetPhase, ViewEvent};
