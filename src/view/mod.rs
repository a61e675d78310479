pub mod snapshot;
pub mod spotlight_view;

pub use snapshot::TargetPhase;
pub use spotlight_view::{FrameValues, SpotlightView, ViewEvent};
