//! Forest composition pipeline.
//!
//! Orchestrates:
//! 1. Tree placement over a disc, avoiding exclusion zones
//! 2. Per-tree seed derivation
//! 3. Canopy generation for each placed tree
//!
//! The output is plain data; uploading it to the GPU is up to the renderer.

pub mod config;
pub mod descriptor;
pub mod composer;
pub mod export;

pub use config::ForestConfig;
pub use descriptor::{Forest, TreeDescriptor};
pub use composer::{compose, tree_seed, ForestComposer, RegenerationToken};
pub use export::FOREST_FILE_EXTENSION;
