//! Mathematical utilities

pub mod rng;
pub mod color;

pub use rng::{RandomSource, SeedMode, SeededRandom};
pub use color::hsl_to_rgb;
