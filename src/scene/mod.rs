pub mod model;
pub mod tour;
