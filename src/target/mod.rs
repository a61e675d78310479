pub mod element;
pub mod listener;
pub mod model;
pub mod overlay;
