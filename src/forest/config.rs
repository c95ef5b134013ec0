//! Forest generation configuration.

use serde::{Deserialize, Serialize};

use crate::canopy::TreeShape;
use crate::core::{Error, Result};
use crate::math::SeedMode;
use crate::placement::{AreaSampler, ExclusionZone, DEFAULT_ATTEMPT_FACTOR};

/// Z position of the river running along X through the default scene.
pub const RIVER_CENTER_Z: f32 = -10.0;
/// Full length of the river strip.
pub const RIVER_LENGTH: f32 = 180.0;
/// Full width of the river strip.
pub const RIVER_WIDTH: f32 = 10.0;

/// Parameters for one forest generation pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Number of trees requested
    pub count: usize,
    /// Radius of the disc trees are scattered over
    pub radius: f32,
    /// Minimum distance between tree trunks
    pub min_distance: f32,
    /// Uniform scale applied to each whole tree
    pub tree_scale: f32,
    /// Leaves per tree canopy
    pub leaf_count: usize,
    /// Areas where no tree may stand
    pub exclusion_zones: Vec<ExclusionZone>,
    /// Seeded or non-deterministic generation
    pub seed: SeedMode,
    /// Placement attempts allowed per requested tree
    pub attempt_factor: u32,
    /// Trunk and canopy geometry
    pub shape: TreeShape,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            count: 20,
            radius: 55.0,
            min_distance: 3.5,
            tree_scale: 1.2,
            leaf_count: 80,
            exclusion_zones: Vec::new(),
            seed: SeedMode::default(),
            attempt_factor: DEFAULT_ATTEMPT_FACTOR,
            shape: TreeShape::default(),
        }
    }
}

impl ForestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default forest with the river bed kept clear.
    pub fn riverside() -> Self {
        Self {
            exclusion_zones: vec![ExclusionZone::river(RIVER_CENTER_Z, RIVER_LENGTH, RIVER_WIDTH)],
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: SeedMode) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_zone(mut self, zone: ExclusionZone) -> Self {
        self.exclusion_zones.push(zone);
        self
    }

    /// Bitwise equality over every field, used as the cache key.
    ///
    /// Unlike `==`, a config holding NaN still matches itself.
    pub(crate) fn same_key(&self, other: &Self) -> bool {
        let a = &self.shape;
        let b = &other.shape;
        let shape_bits = |s: &TreeShape| [
            s.trunk_height, s.canopy_gap, s.trunk_radius_top, s.trunk_radius_bottom,
            s.leaf_width, s.leaf_height, s.crown_radius, s.crown_offset,
        ].map(f32::to_bits);
        let zone_bits = |z: &ExclusionZone| [z.x, z.z, z.half_length, z.half_width].map(f32::to_bits);

        self.count == other.count
            && self.leaf_count == other.leaf_count
            && self.seed == other.seed
            && self.attempt_factor == other.attempt_factor
            && self.radius.to_bits() == other.radius.to_bits()
            && self.min_distance.to_bits() == other.min_distance.to_bits()
            && self.tree_scale.to_bits() == other.tree_scale.to_bits()
            && a.trunk_segments == b.trunk_segments
            && shape_bits(a) == shape_bits(b)
            && self.exclusion_zones.len() == other.exclusion_zones.len()
            && self.exclusion_zones.iter()
                .zip(&other.exclusion_zones)
                .all(|(za, zb)| zone_bits(za) == zone_bits(zb))
    }

    /// Sampler configured from this config.
    pub fn sampler(&self) -> AreaSampler {
        AreaSampler::new(self.count, self.radius, self.min_distance)
            .with_attempt_factor(self.attempt_factor)
    }

    /// Check values that would make a loaded config meaningless.
    ///
    /// Generation itself accepts anything; this is for configs coming from
    /// files or the command line.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::Config(format!("radius must be positive, got {}", self.radius)));
        }
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(Error::Config(format!(
                "min_distance must be non-negative, got {}", self.min_distance
            )));
        }
        if !self.tree_scale.is_finite() || self.tree_scale <= 0.0 {
            return Err(Error::Config(format!(
                "tree_scale must be positive, got {}", self.tree_scale
            )));
        }
        if self.attempt_factor == 0 {
            return Err(Error::Config("attempt_factor must be at least 1".to_string()));
        }
        for (i, zone) in self.exclusion_zones.iter().enumerate() {
            let finite = [zone.x, zone.z, zone.half_length, zone.half_width]
                .iter()
                .all(|v| v.is_finite());
            if !finite || zone.half_length < 0.0 || zone.half_width < 0.0 {
                return Err(Error::Config(format!("exclusion zone {} is invalid: {:?}", i, zone)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ForestConfig::default();
        assert_eq!(cfg.count, 20);
        assert_eq!(cfg.leaf_count, 80);
        assert_eq!(cfg.seed, SeedMode::Seeded(12345));
        assert!(cfg.exclusion_zones.is_empty());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_riverside_zone() {
        let cfg = ForestConfig::riverside();
        assert_eq!(cfg.exclusion_zones, vec![ExclusionZone::new(0.0, -10.0, 90.0, 5.0)]);
    }

    #[test]
    fn test_sampler_carries_attempt_factor() {
        let cfg = ForestConfig { attempt_factor: 10, count: 4, ..Default::default() };
        assert_eq!(cfg.sampler().attempt_cap(), 40);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_radius = ForestConfig { radius: 0.0, ..Default::default() };
        assert!(matches!(bad_radius.validate(), Err(Error::Config(_))));

        let bad_distance = ForestConfig { min_distance: f32::NAN, ..Default::default() };
        assert!(bad_distance.validate().is_err());

        let bad_factor = ForestConfig { attempt_factor: 0, ..Default::default() };
        assert!(bad_factor.validate().is_err());

        let bad_zone = ForestConfig::default().with_zone(ExclusionZone::new(0.0, 0.0, -1.0, 2.0));
        assert!(bad_zone.validate().is_err());
    }

    #[test]
    fn test_same_key_is_bitwise() {
        let nan = ForestConfig { radius: f32::NAN, ..Default::default() };
        assert_ne!(nan, nan.clone());
        assert!(nan.same_key(&nan.clone()));

        let zoned = ForestConfig::riverside();
        assert!(zoned.same_key(&ForestConfig::riverside()));
        assert!(!zoned.same_key(&ForestConfig::default()));

        let signed = ForestConfig { min_distance: -0.0, ..Default::default() };
        let unsigned = ForestConfig { min_distance: 0.0, ..Default::default() };
        assert!(!signed.same_key(&unsigned));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: ForestConfig = serde_json::from_str(r#"{ "count": 7, "seed": "NonDeterministic" }"#)
            .expect("parse failed");
        assert_eq!(cfg.count, 7);
        assert_eq!(cfg.seed, SeedMode::NonDeterministic);
        assert_eq!(cfg.radius, 55.0);
    }
}
