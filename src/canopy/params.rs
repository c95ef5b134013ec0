//! Leaf instance GPU layout.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Per-instance vertex data for instanced leaf quads.
/// Column-major model matrix followed by RGBA color.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LeafInstanceRaw {
    /// Model matrix columns
    pub model: [[f32; 4]; 4],
    /// RGB color, alpha fixed at 1.0
    pub color: [f32; 4],
}

impl LeafInstanceRaw {
    pub fn new(model: Mat4, color: [f32; 3]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
        }
    }
}

/// View a slice of instances as raw bytes for buffer upload.
pub fn instance_bytes(instances: &[LeafInstanceRaw]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
