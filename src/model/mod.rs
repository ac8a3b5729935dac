//! Questionnaire data model: dimensions, profiles, and the output map entry.
//!
//! Dimensions and profiles are loaded once per run and treated as immutable.
//! Everything downstream (encoded vectors, distances, layout) is derived.

pub mod dataset;
pub mod dimension;
pub mod profile;

pub use dataset::Dataset;
pub use dimension::{Dimension, DimensionOption};
pub use profile::{MapEntry, Profile};
