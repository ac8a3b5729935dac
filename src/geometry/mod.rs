//! Points and pairwise distances.

pub mod distance;
pub mod point;

pub use distance::{euclidean, DistanceMatrix};
pub use point::Point2;
