pub mod region;
pub mod shape;
