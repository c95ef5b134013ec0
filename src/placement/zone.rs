//! Rectangular exclusion zones.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on the ground plane where nothing may be placed.
///
/// `half_length` extends along X, `half_width` along Z. Points on the edge
/// count as inside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExclusionZone {
    pub x: f32,
    pub z: f32,
    pub half_length: f32,
    pub half_width: f32,
}

impl ExclusionZone {
    pub fn new(x: f32, z: f32, half_length: f32, half_width: f32) -> Self {
        Self { x, z, half_length, half_width }
    }

    /// Zone covering a river strip of the given full length (X) and width (Z).
    pub fn river(center_z: f32, length: f32, width: f32) -> Self {
        Self::new(0.0, center_z, length * 0.5, width * 0.5)
    }

    /// Check whether a ground point lies inside the zone.
    #[inline]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        (x - self.x).abs() <= self.half_length && (z - self.z).abs() <= self.half_width
    }

    /// Same as [`contains`](Self::contains), ignoring the point's height.
    pub fn contains_point(&self, p: Vec3) -> bool {
        self.contains(p.x, p.z)
    }
}
