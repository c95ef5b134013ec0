//! Ground placement of trees.
//!
//! Scatters points over a disc with a minimum spacing, keeping them out of
//! rectangular exclusion zones such as river beds.

pub mod zone;
pub mod sampler;

pub use zone::ExclusionZone;
pub use sampler::{AreaSampler, Placement, PlacementReport, DEFAULT_ATTEMPT_FACTOR};
