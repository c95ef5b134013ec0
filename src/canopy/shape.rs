//! Fixed tree geometry shared by the generator and the renderer.
//!
//! The trunk is not generated: its base sits at local y = 0 and its top at
//! `trunk_height`. Leaves start a small gap above the trunk top so they do
//! not intersect it.

use serde::{Deserialize, Serialize};

/// Trunk height in local units (trunk base at y = 0).
pub const TRUNK_HEIGHT: f32 = 1.8;
/// Gap between trunk top and the lowest leaf.
pub const CANOPY_GAP: f32 = 0.12;
/// Lowest local height any leaf may occupy.
pub const CANOPY_BASE: f32 = TRUNK_HEIGHT + CANOPY_GAP;

/// Geometry constants for one tree, in local (unscaled) units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeShape {
    /// Trunk cylinder height
    pub trunk_height: f32,
    /// Gap between trunk top and canopy base
    pub canopy_gap: f32,
    /// Trunk radius at the top
    pub trunk_radius_top: f32,
    /// Trunk radius at the base
    pub trunk_radius_bottom: f32,
    /// Radial segments of the trunk cylinder
    pub trunk_segments: u32,
    /// Leaf quad width
    pub leaf_width: f32,
    /// Leaf quad height
    pub leaf_height: f32,
    /// Radius of the crown sphere sitting on the trunk
    pub crown_radius: f32,
    /// Crown centre height above the trunk top
    pub crown_offset: f32,
}

impl Default for TreeShape {
    fn default() -> Self {
        Self {
            trunk_height: TRUNK_HEIGHT,
            canopy_gap: CANOPY_GAP,
            trunk_radius_top: 0.12,
            trunk_radius_bottom: 0.18,
            trunk_segments: 8,
            leaf_width: 0.5,
            leaf_height: 0.65,
            crown_radius: 1.05,
            crown_offset: 0.35,
        }
    }
}

impl TreeShape {
    /// Height of the canopy floor: trunk top plus gap.
    pub fn canopy_base(&self) -> f32 {
        self.trunk_height + self.canopy_gap
    }

    /// Local centre of the trunk cylinder (it is centred on its own origin).
    pub fn trunk_center_y(&self) -> f32 {
        self.trunk_height * 0.5
    }

    /// Local centre of the crown sphere.
    pub fn crown_center_y(&self) -> f32 {
        self.trunk_height + self.crown_offset
    }
}
