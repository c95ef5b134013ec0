//! Forest composition: tree placement followed by one canopy per tree.
//!
//! [`compose`] is a pure function of its config (in seeded mode). The
//! [`ForestComposer`] wraps it with a single-entry cache keyed by the config
//! and a caller-owned [`RegenerationToken`], so a host can ask for the forest
//! every frame and only pay for generation when something changed.

use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::canopy::CanopyGenerator;
use crate::forest::config::ForestConfig;
use crate::forest::descriptor::{Forest, TreeDescriptor};
use crate::math::SeedMode;

/// Exclusive upper bound for per-tree seeds drawn in non-deterministic mode.
const RANDOM_TREE_SEED_BOUND: u32 = 1_000_000_000;

/// Opaque regeneration trigger. Bump it to force a new forest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegenerationToken(pub u64);

impl RegenerationToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Seed for the canopy of tree `index`.
///
/// Seeded mode offsets the forest seed by `index + 1` so every tree gets its
/// own stable stream. Non-deterministic mode draws a fresh seed; it is still
/// recorded on the tree so its canopy can be reproduced.
pub fn tree_seed(mode: SeedMode, index: usize) -> u32 {
    match mode {
        SeedMode::Seeded(seed) => seed.wrapping_add(index as u32).wrapping_add(1),
        SeedMode::NonDeterministic => rand::thread_rng().gen_range(0..RANDOM_TREE_SEED_BOUND),
    }
}

/// Generate a complete forest.
pub fn compose(config: &ForestConfig) -> Forest {
    let start = Instant::now();

    let mut rng = config.seed.source();
    let placement = config.sampler().sample(&config.exclusion_zones, &mut rng);

    let canopy = CanopyGenerator::new(config.leaf_count, config.shape.canopy_base());
    let trees: Vec<TreeDescriptor> = placement.positions
        .iter()
        .enumerate()
        .map(|(i, &position)| {
            let seed = tree_seed(config.seed, i);
            log::trace!("Building {} leaves for tree {} (seed {})", config.leaf_count, i, seed);
            TreeDescriptor {
                position,
                seed,
                scale: config.tree_scale,
                canopy: canopy.generate_seeded(seed),
            }
        })
        .collect();

    let forest = Forest { trees, placement: placement.report };

    log::info!("Composed forest: {}/{} trees, {} leaves in {:.2}ms",
        forest.len(), config.count, forest.total_leaves(),
        start.elapsed().as_secs_f64() * 1000.0);

    forest
}

struct CachedForest {
    config: ForestConfig,
    token: RegenerationToken,
    forest: Forest,
}

/// Memoizes the last composed forest.
///
/// The cache holds one entry. A request with the same config and token
/// returns it unchanged; anything else discards it and composes from scratch.
#[derive(Default)]
pub struct ForestComposer {
    cached: Option<CachedForest>,
    generations: u64,
}

impl ForestComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached forest, composing a new one if the config or token changed.
    pub fn get_or_compose(&mut self, config: &ForestConfig, token: RegenerationToken) -> &Forest {
        let hit = matches!(&self.cached,
            Some(cached) if cached.token == token && cached.config.same_key(config));

        if !hit {
            if self.cached.is_some() {
                log::debug!("Forest cache invalidated (token {:?})", token);
            }
            self.cached = None;
            self.generations += 1;
        }

        &self.cached.get_or_insert_with(|| CachedForest {
            config: config.clone(),
            token,
            forest: compose(config),
        }).forest
    }

    /// The cached forest, if any.
    pub fn cached(&self) -> Option<&Forest> {
        self.cached.as_ref().map(|c| &c.forest)
    }

    /// Token of the cached forest, if any.
    pub fn cached_token(&self) -> Option<RegenerationToken> {
        self.cached.as_ref().map(|c| c.token)
    }

    /// Drop the cached forest. The next request recomposes.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Number of times a forest has been composed.
    pub fn generation_count(&self) -> u64 {
        self.generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canopy::CANOPY_BASE;
    use crate::placement::ExclusionZone;

    #[test]
    fn test_default_forest_fills() {
        let config = ForestConfig::default();
        let forest = compose(&config);

        assert_eq!(forest.len(), 20);
        assert!(!forest.placement.is_under_filled());
        for (i, tree) in forest.iter().enumerate() {
            assert!(tree.position.x.hypot(tree.position.z) <= 55.0 + 1e-3);
            assert_eq!(tree.seed, 12345 + i as u32 + 1);
            assert_eq!(tree.scale, 1.2);
            assert_eq!(tree.canopy.len(), 80);
            assert!(tree.canopy.min_height().unwrap() >= CANOPY_BASE);
        }
        let positions: Vec<_> = forest.positions().collect();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!(a.distance(*b) >= 3.5 - 1e-4);
            }
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let config = ForestConfig::riverside();
        assert_eq!(compose(&config), compose(&config));
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = compose(&ForestConfig::default().with_seed(SeedMode::Seeded(1)));
        let b = compose(&ForestConfig::default().with_seed(SeedMode::Seeded(2)));
        assert_ne!(a, b);
    }

    #[test]
    fn test_riverside_keeps_river_clear() {
        let forest = compose(&ForestConfig::riverside());
        assert!(!forest.is_empty());
        for p in forest.positions() {
            assert!(!(p.x.abs() <= 90.0 && (p.z + 10.0).abs() <= 5.0), "{:?} is in the river", p);
        }
    }

    #[test]
    fn test_canopy_matches_recorded_seed() {
        let config = ForestConfig { count: 3, leaf_count: 12, ..Default::default() };
        let forest = compose(&config);
        let generator = CanopyGenerator::new(12, config.shape.canopy_base());
        for tree in &forest.trees {
            assert_eq!(tree.canopy, generator.generate_seeded(tree.seed));
        }
    }

    #[test]
    fn test_zero_leaves_and_zero_trees() {
        let no_leaves = compose(&ForestConfig { leaf_count: 0, ..Default::default() });
        assert!(no_leaves.iter().all(|t| t.canopy.is_empty()));

        let no_trees = compose(&ForestConfig { count: 0, ..Default::default() });
        assert!(no_trees.is_empty());
        assert_eq!(no_trees.placement.requested, 0);
    }

    #[test]
    fn test_infeasible_density_reports_shortfall() {
        let config = ForestConfig { count: 5, radius: 1.0, min_distance: 10.0, ..Default::default() };
        let forest = compose(&config);
        assert!(forest.len() < 5);
        assert!(forest.placement.is_under_filled());
        assert_eq!(forest.placement.placed, forest.len());
    }

    #[test]
    fn test_non_deterministic_mode() {
        let config = ForestConfig {
            count: 10,
            leaf_count: 5,
            seed: SeedMode::NonDeterministic,
            ..Default::default()
        }.with_zone(ExclusionZone::river(-10.0, 180.0, 10.0));
        let forest = compose(&config);
        assert!(forest.len() <= 10);
        for tree in &forest.trees {
            assert!(tree.seed < RANDOM_TREE_SEED_BOUND);
            assert_eq!(tree.canopy.len(), 5);
        }
    }

    #[test]
    fn test_tree_seed_wraps() {
        assert_eq!(tree_seed(SeedMode::Seeded(u32::MAX), 0), 0);
        assert_eq!(tree_seed(SeedMode::Seeded(10), 4), 15);
    }

    #[test]
    fn test_cache_reuses_result() {
        let config = ForestConfig { count: 5, leaf_count: 4, ..Default::default() };
        let mut composer = ForestComposer::new();
        let token = RegenerationToken::default();

        let first = composer.get_or_compose(&config, token).clone();
        let second = composer.get_or_compose(&config, token).clone();
        assert_eq!(first, second);
        assert_eq!(composer.generation_count(), 1);
        assert_eq!(composer.cached_token(), Some(token));
    }

    #[test]
    fn test_token_change_recomposes() {
        let config = ForestConfig { count: 5, leaf_count: 4, ..Default::default() };
        let mut composer = ForestComposer::new();
        let token = RegenerationToken::default();

        let first = composer.get_or_compose(&config, token).clone();
        let second = composer.get_or_compose(&config, token.next()).clone();
        assert_eq!(composer.generation_count(), 2);
        // Seeded mode: recomputation reproduces the same forest
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_change_recomposes() {
        let mut composer = ForestComposer::new();
        let token = RegenerationToken(3);
        let a = ForestConfig { count: 5, leaf_count: 4, ..Default::default() };
        let b = ForestConfig { count: 6, ..a.clone() };

        assert_eq!(composer.get_or_compose(&a, token).len(), 5);
        assert_eq!(composer.get_or_compose(&b, token).len(), 6);
        assert_eq!(composer.generation_count(), 2);
    }

    #[test]
    fn test_non_deterministic_cache_is_stable_until_token_changes() {
        let config = ForestConfig {
            count: 8,
            leaf_count: 3,
            seed: SeedMode::NonDeterministic,
            ..Default::default()
        };
        let mut composer = ForestComposer::new();
        let token = RegenerationToken(1);

        let first = composer.get_or_compose(&config, token).clone();
        let again = composer.get_or_compose(&config, token).clone();
        assert_eq!(first, again);
        assert_eq!(composer.generation_count(), 1);
    }

    #[test]
    fn test_nan_config_still_hits_cache() {
        let config = ForestConfig {
            count: 3,
            leaf_count: 2,
            min_distance: f32::NAN,
            seed: SeedMode::NonDeterministic,
            ..Default::default()
        };
        let mut composer = ForestComposer::new();
        let token = RegenerationToken(1);

        let first = composer.get_or_compose(&config, token).clone();
        let again = composer.get_or_compose(&config, token).clone();
        assert_eq!(composer.generation_count(), 1);
        assert_eq!(first, again);
    }

    #[test]
    fn test_invalidate() {
        let config = ForestConfig { count: 2, leaf_count: 2, ..Default::default() };
        let mut composer = ForestComposer::new();
        composer.get_or_compose(&config, RegenerationToken(0));
        assert!(composer.cached().is_some());

        composer.invalidate();
        assert!(composer.cached().is_none());

        composer.get_or_compose(&config, RegenerationToken(0));
        assert_eq!(composer.generation_count(), 2);
    }
}
