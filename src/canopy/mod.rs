//! Instanced leaf canopies.
//!
//! A canopy is a flat list of leaf transforms and colors sitting above a
//! fixed trunk. The renderer draws one leaf quad per instance.

pub mod shape;
pub mod instance;
pub mod params;
pub mod generator;

pub use shape::{TreeShape, CANOPY_BASE, CANOPY_GAP, TRUNK_HEIGHT};
pub use instance::{CanopyInstanceSet, LeafInstance};
pub use params::LeafInstanceRaw;
pub use generator::CanopyGenerator;
