//! Categorical answer → numeric vector encoding.

pub mod tetralemma;

pub use tetralemma::{encode_answer, encode_profile, encode_profiles, Corner, TETRALEMMA_VECTORS};
