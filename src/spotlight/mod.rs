pub mod builder;
pub mod control;
pub mod listener;
pub mod sequence;

pub use builder::SpotlightBuilder;
pub use control::{Command, Control};
pub use listener::SpotlightListener;
pub use sequence::{Spotlight, SpotlightState, Stage};
