//! Generated forest data handed to the renderer.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::canopy::CanopyInstanceSet;
use crate::placement::PlacementReport;

/// One placed tree and its canopy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeDescriptor {
    /// Ground position (y = 0)
    pub position: Vec3,
    /// Seed the canopy was generated from
    pub seed: u32,
    /// Uniform scale of the whole tree
    pub scale: f32,
    /// Leaf instances in tree-local space
    pub canopy: CanopyInstanceSet,
}

impl TreeDescriptor {
    /// Tree-local to world transform.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), Quat::IDENTITY, self.position)
    }

    /// World-space matrices for every leaf, in canopy order.
    pub fn leaf_world_matrices(&self) -> Vec<Mat4> {
        let world = self.world_matrix();
        self.canopy.iter().map(|leaf| world * leaf.model_matrix()).collect()
    }

    pub fn leaf_count(&self) -> usize {
        self.canopy.len()
    }
}

/// Result of one composition pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    pub trees: Vec<TreeDescriptor>,
    /// How tree placement went, including any shortfall
    pub placement: PlacementReport,
}

impl Forest {
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeDescriptor> {
        self.trees.iter()
    }

    /// Leaf instances across all trees.
    pub fn total_leaves(&self) -> usize {
        self.trees.iter().map(TreeDescriptor::leaf_count).sum()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.trees.iter().map(|t| t.position)
    }
}
