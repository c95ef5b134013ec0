//! Bounded rejection sampling of ground positions inside a disc.
//!
//! This is not a true Poisson-disc sampler. Candidates are drawn uniformly
//! over the disc area and rejected if they fall in an exclusion zone or too
//! close to an accepted point. The number of attempts is capped at
//! `count * attempt_factor`, a heuristic with no feasibility guarantee: dense
//! configurations come back short, and the accepted set is not guaranteed to
//! be evenly spread.

use std::f32::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::RandomSource;
use crate::placement::ExclusionZone;

/// Default number of attempts allowed per requested point.
pub const DEFAULT_ATTEMPT_FACTOR: u32 = 200;

/// Upper bound on up-front allocation; larger requests grow as points are accepted.
const MAX_PREALLOCATED: usize = 1024;

/// Outcome of a sampling pass.
///
/// Sampling never fails; a short result is reported here instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    /// Points asked for.
    pub requested: usize,
    /// Points actually accepted.
    pub placed: usize,
    /// Candidates drawn.
    pub attempts: usize,
    /// Maximum candidates allowed.
    pub attempt_cap: usize,
}

impl PlacementReport {
    /// True if fewer points were placed than requested.
    pub fn is_under_filled(&self) -> bool {
        self.placed < self.requested
    }

    /// Requested points that could not be placed.
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.placed)
    }
}

/// Accepted positions plus the report describing how they were found.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placement {
    pub positions: Vec<Vec3>,
    pub report: PlacementReport,
}

/// Samples up to `count` ground positions inside a disc centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaSampler {
    /// Target number of points.
    pub count: usize,
    /// Disc radius.
    pub radius: f32,
    /// Minimum distance between any two accepted points.
    pub min_distance: f32,
    /// Attempts allowed per requested point.
    pub attempt_factor: u32,
}

impl AreaSampler {
    pub fn new(count: usize, radius: f32, min_distance: f32) -> Self {
        Self {
            count,
            radius,
            min_distance,
            attempt_factor: DEFAULT_ATTEMPT_FACTOR,
        }
    }

    /// Override the attempts-per-point heuristic.
    pub fn with_attempt_factor(mut self, attempt_factor: u32) -> Self {
        self.attempt_factor = attempt_factor;
        self
    }

    /// Total candidate budget for one pass.
    pub fn attempt_cap(&self) -> usize {
        self.count.saturating_mul(self.attempt_factor as usize)
    }

    /// Draw a point uniformly over the disc area.
    ///
    /// The square root on the radial draw keeps density uniform per unit
    /// area instead of per unit radius.
    fn candidate(radius: f32, rng: &mut RandomSource) -> Vec3 {
        let angle = rng.next_f32() * TAU;
        let dist = rng.next_f32().sqrt() * radius;
        Vec3::new(angle.cos() * dist, 0.0, angle.sin() * dist)
    }

    /// Run the sampler.
    pub fn sample(&self, zones: &[ExclusionZone], rng: &mut RandomSource) -> Placement {
        // NaN and negative inputs degrade to zero rather than failing
        let radius = self.radius.max(0.0);
        let min_distance = self.min_distance.max(0.0);
        let min_distance_sq = min_distance * min_distance;
        let cap = self.attempt_cap();

        let mut positions: Vec<Vec3> = Vec::with_capacity(self.count.min(MAX_PREALLOCATED));
        let mut attempts = 0usize;

        while positions.len() < self.count && attempts < cap {
            attempts += 1;
            let p = Self::candidate(radius, rng);

            if zones.iter().any(|zone| zone.contains_point(p)) {
                continue;
            }

            let too_close = positions.iter().any(|q| {
                let dx = q.x - p.x;
                let dz = q.z - p.z;
                dx * dx + dz * dz < min_distance_sq
            });
            if too_close {
                continue;
            }

            positions.push(p);
        }

        let report = PlacementReport {
            requested: self.count,
            placed: positions.len(),
            attempts,
            attempt_cap: cap,
        };

        if report.is_under_filled() {
            log::warn!(
                "Placement under-filled: requested {}, placed {} after {} attempts (radius {}, min distance {})",
                report.requested, report.placed, report.attempts, radius, min_distance
            );
        } else {
            log::debug!("Placed {} points in {} attempts", report.placed, report.attempts);
        }

        Placement { positions, report }
    }
}
