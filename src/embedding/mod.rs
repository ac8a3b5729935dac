//! 2D embedding: stress-minimizing layout followed by range normalization.

pub mod normalize;
pub mod stress;

pub use normalize::{normalize, Bounds};
pub use stress::{initial_layout, optimize, stress, StressConfig, StressReport};
