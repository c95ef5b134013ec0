//! Leaf canopy generator.
//!
//! Every leaf consumes a fixed sequence of ten draws from the random stream,
//! so the canopy for a given seed and leaf count is always the same. There is
//! no rejection step: the output always has exactly `leaf_count` entries.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use crate::canopy::instance::{CanopyInstanceSet, LeafInstance};
use crate::canopy::shape::CANOPY_BASE;
use crate::math::{hsl_to_rgb, RandomSource};

/// Leaf height above the canopy base: [HEIGHT_MIN, HEIGHT_MIN + HEIGHT_SPAN)
const HEIGHT_MIN: f32 = 0.1;
const HEIGHT_SPAN: f32 = 0.6;
/// Maximum tilt/roll jitter, radians
const ANGLE_JITTER: f32 = 0.6;
const SCALE_MIN: f32 = 0.6;
const SCALE_SPAN: f32 = 0.9;
const LEAF_HUE: f32 = 0.33;
const HUE_JITTER: f32 = 0.05;
const LEAF_SATURATION: f32 = 0.6;
const LIGHTNESS_MIN: f32 = 0.5;
const LIGHTNESS_SPAN: f32 = 0.1;

/// Generates the leaf instances of a single tree canopy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanopyGenerator {
    /// Number of leaves to emit
    pub leaf_count: usize,
    /// Local height of the canopy floor
    pub canopy_base: f32,
}

impl Default for CanopyGenerator {
    fn default() -> Self {
        Self::new(80, CANOPY_BASE)
    }
}

impl CanopyGenerator {
    pub fn new(leaf_count: usize, canopy_base: f32) -> Self {
        Self { leaf_count, canopy_base }
    }

    /// Generate from a fresh seeded stream.
    pub fn generate_seeded(&self, seed: u32) -> CanopyInstanceSet {
        self.generate(&mut RandomSource::seeded(seed))
    }

    /// Generate the canopy, consuming draws from `rng`.
    pub fn generate(&self, rng: &mut RandomSource) -> CanopyInstanceSet {
        let leaves = (0..self.leaf_count)
            .map(|_| self.leaf(rng))
            .collect();
        CanopyInstanceSet::new(leaves)
    }

    fn leaf(&self, rng: &mut RandomSource) -> LeafInstance {
        let h = rng.next_f32() * HEIGHT_SPAN + HEIGHT_MIN;
        // Product of two draws: denser toward the trunk, rounder silhouette
        let radius = rng.next_f32() * 0.9 * (0.6 + rng.next_f32() * 1.2);
        let angle = rng.next_f32() * TAU;
        let position = Vec3::new(
            angle.cos() * radius,
            self.canopy_base + h,
            angle.sin() * radius,
        );

        let tilt = -FRAC_PI_2 + (rng.next_f32() - 0.5) * ANGLE_JITTER;
        let spin = rng.next_f32() * TAU;
        let roll = (rng.next_f32() - 0.5) * ANGLE_JITTER;

        let scale = SCALE_MIN + rng.next_f32() * SCALE_SPAN;

        let hue = LEAF_HUE + (rng.next_f32() - 0.5) * HUE_JITTER;
        let lightness = LIGHTNESS_MIN + rng.next_f32() * LIGHTNESS_SPAN;

        LeafInstance {
            position,
            rotation: Vec3::new(tilt, spin, roll),
            scale,
            color: hsl_to_rgb(hue, LEAF_SATURATION, lightness),
        }
    }
}
