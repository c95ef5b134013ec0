//! Per-leaf instance records.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::canopy::params::LeafInstanceRaw;

/// Transform and color of one leaf, in the tree's local space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeafInstance {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order
    pub rotation: Vec3,
    pub scale: f32,
    /// Linear RGB in [0, 1]
    pub color: [f32; 3],
}

impl LeafInstance {
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Local model matrix: translation * rotation * uniform scale.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation_quat(),
            self.position,
        )
    }

    /// Pack into the GPU instance layout.
    pub fn to_raw(&self) -> LeafInstanceRaw {
        LeafInstanceRaw::new(self.model_matrix(), self.color)
    }
}

/// Ordered set of leaf instances for one tree.
///
/// Order is generation order and is stable for a given seed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanopyInstanceSet {
    leaves: Vec<LeafInstance>,
}

impl CanopyInstanceSet {
    pub fn new(leaves: Vec<LeafInstance>) -> Self {
        Self { leaves }
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn leaves(&self) -> &[LeafInstance] {
        &self.leaves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LeafInstance> {
        self.leaves.iter()
    }

    /// Lowest leaf height, or `None` for an empty canopy.
    pub fn min_height(&self) -> Option<f32> {
        self.leaves.iter().map(|l| l.position.y).reduce(f32::min)
    }

    /// Flat instance buffer ready for upload.
    pub fn to_gpu_instances(&self) -> Vec<LeafInstanceRaw> {
        self.leaves.iter().map(LeafInstance::to_raw).collect()
    }
}

impl<'a> IntoIterator for &'a CanopyInstanceSet {
    type Item = &'a LeafInstance;
    type IntoIter = std::slice::Iter<'a, LeafInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves.iter()
    }
}
