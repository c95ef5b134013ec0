//! Grove - deterministic procedural forest generation

pub mod core;
pub mod math;
pub mod placement;
pub mod canopy;
pub mod forest;
