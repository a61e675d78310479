pub mod clock;
pub mod ease;
pub mod timeline;
