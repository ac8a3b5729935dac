//! # tetramap
//!
//! Places a set of named profiles on a 2D map so that profiles answering a
//! questionnaire alike end up close together.
//!
//! ## Pipeline
//!
//! 1. **Encoding**: each categorical answer becomes a tetralemma 2-vector
//!    (A, B, Both, Neither), concatenated across dimensions
//! 2. **Distance**: symmetric pairwise Euclidean dissimilarity matrix
//! 3. **Stress embedding**: gradient-descent MDS with a decaying step size
//! 4. **Normalization**: rescale and recenter into [-90, 90] on both axes
//!
//! [`runtime::pipeline::MapPipeline`] wires the stages together and
//! [`runtime::io`] handles the JSON documents on either side.

pub mod analysis;
pub mod embedding;
pub mod encoding;
pub mod error;
pub mod geometry;
pub mod model;
pub mod runtime;

pub use error::LayoutError;

/// Run-wide constants and defaults.
pub mod config {
    /// Options per dimension (one per tetralemma corner).
    pub const OPTIONS_PER_DIMENSION: usize = 4;

    /// Encoded components per dimension.
    pub const COMPONENTS_PER_DIMENSION: usize = 2;

    /// Default RNG seed for the initial layout.
    pub const DEFAULT_SEED: u64 = 42;

    /// Default number of gradient-descent iterations.
    pub const DEFAULT_ITERATIONS: usize = 2000;

    /// Starting learning rate.
    pub const INITIAL_LEARNING_RATE: f64 = 1.0;

    /// Multiplicative learning-rate decay per iteration.
    pub const LEARNING_RATE_DECAY: f64 = 0.999;

    /// Added to every layout distance so coincident points never divide by zero.
    pub const DISTANCE_EPSILON: f64 = 1e-10;

    /// Initial coordinates are drawn from [-INIT_RANGE, INIT_RANGE].
    pub const INIT_RANGE: f64 = 100.0;

    /// Full width of each normalized axis. Output spans half of this either side of 0.
    pub const OUTPUT_SPAN: f64 = 180.0;

    /// Most decimals output coordinates may be rounded to. Beyond this an
    /// f64 carries no further digits in the ±90 range.
    pub const MAX_DECIMALS: u32 = 15;

    /// Conventional input/output filenames.
    pub const DIMENSIONS_FILE: &str = "dimensions.json";
    pub const PROFILES_FILE: &str = "systems.json";
    pub const OUTPUT_FILE: &str = "systems_map.json";

    /// Upper bound on the tetralemma Manhattan distance for one dimension.
    pub const MAX_DIMENSION_DISTANCE: u32 = 2;

    /// Encoded vector length for `n_dimensions` dimensions.
    pub fn encoded_len(n_dimensions: usize) -> usize {
        n_dimensions * COMPONENTS_PER_DIMENSION
    }
}
