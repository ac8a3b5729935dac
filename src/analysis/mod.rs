//! Profile-to-profile comparison on the tetralemma square.

pub mod similarity;

pub use similarity::{compare_profiles, rank_neighbours, Agreement, Neighbour, ProfileComparison};
