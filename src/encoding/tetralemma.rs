//! Tetralemma encoding: four options → four corners of the unit square.
//!
//! ```text
//! position 0  A        (1, 0)
//! position 1  B        (0, 1)
//! position 2  Both     (1, 1)
//! position 3  Neither  (0, 0)
//! ```
//!
//! An absent or unrecognised answer also encodes as (0, 0), so it is
//! indistinguishable from an explicit "Neither".

use ndarray::Array1;

use crate::config::{encoded_len, COMPONENTS_PER_DIMENSION};
use crate::model::{Dimension, Profile};

/// Encoding table indexed by option position.
pub const TETRALEMMA_VECTORS: [[f64; 2]; 4] = [[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]];

/// Vector used when a profile gives no usable answer.
pub const NO_SIGNAL: [f64; 2] = [0.0, 0.0];

/// The four tetralemma positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    A,
    B,
    Both,
    Neither,
}

impl Corner {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Corner::A),
            1 => Some(Corner::B),
            2 => Some(Corner::Both),
            3 => Some(Corner::Neither),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Corner::A => 0,
            Corner::B => 1,
            Corner::Both => 2,
            Corner::Neither => 3,
        }
    }

    pub fn vector(self) -> [f64; 2] {
        TETRALEMMA_VECTORS[self.index()]
    }

    /// Manhattan distance between two corners (0, 1 or 2).
    pub fn manhattan(self, other: Corner) -> u32 {
        let a = self.vector();
        let b = other.vector();
        ((a[0] - b[0]).abs() + (a[1] - b[1]).abs()) as u32
    }
}

/// Corner held by `value` on `dimension`, if it matches one of the first four options.
pub fn corner_of(dimension: &Dimension, value: &str) -> Option<Corner> {
    dimension.option_index(value).and_then(Corner::from_index)
}

/// Encode one answer.
pub fn encode_answer(dimension: &Dimension, value: Option<&str>) -> [f64; 2] {
    value
        .and_then(|v| corner_of(dimension, v))
        .map(Corner::vector)
        .unwrap_or(NO_SIGNAL)
}

/// Concatenate the answer vectors of `profile` across `dimensions`, in order.
pub fn encode_profile(dimensions: &[Dimension], profile: &Profile) -> Array1<f64> {
    let mut out = Vec::with_capacity(encoded_len(dimensions.len()));
    for dim in dimensions {
        let v = encode_answer(dim, profile.answer(&dim.id));
        out.extend_from_slice(&v[..COMPONENTS_PER_DIMENSION]);
    }
    Array1::from_vec(out)
}

/// Encode every profile.
pub fn encode_profiles(dimensions: &[Dimension], profiles: &[Profile]) -> Vec<Array1<f64>> {
    profiles
        .iter()
        .map(|p| encode_profile(dimensions, p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> Dimension {
        Dimension::new("dim", "?", &["A", "B", "C", "D"])
    }

    #[test]
    fn test_table_by_position() {
        let dim = abcd();
        assert_eq!(encode_answer(&dim, Some("A")), [1.0, 0.0]);
        assert_eq!(encode_answer(&dim, Some("B")), [0.0, 1.0]);
        assert_eq!(encode_answer(&dim, Some("C")), [1.0, 1.0]);
        assert_eq!(encode_answer(&dim, Some("D")), [0.0, 0.0]);
    }

    #[test]
    fn test_position_not_value_decides() {
        // Same tokens, different order.
        let dim = Dimension::new("dim", "?", &["C", "D", "A", "B"]);
        assert_eq!(encode_answer(&dim, Some("C")), [1.0, 0.0]);
        assert_eq!(encode_answer(&dim, Some("A")), [1.0, 1.0]);
    }

    #[test]
    fn test_unknown_answer_collides_with_fourth_option() {
        let dim = abcd();
        let fourth = encode_answer(&dim, Some("D"));
        assert_eq!(encode_answer(&dim, None), fourth);
        assert_eq!(encode_answer(&dim, Some("E")), fourth);
        assert_eq!(encode_answer(&dim, Some("")), fourth);
    }

    #[test]
    fn test_fifth_option_has_no_corner() {
        let dim = Dimension::new("dim", "?", &["A", "B", "C", "D", "E"]);
        assert_eq!(encode_answer(&dim, Some("E")), NO_SIGNAL);
    }

    #[test]
    fn test_profile_concatenation_in_dimension_order() {
        let dims = vec![
            Dimension::new("x", "?", &["a", "b", "c", "d"]),
            Dimension::new("y", "?", &["a", "b", "c", "d"]),
            Dimension::new("z", "?", &["a", "b", "c", "d"]),
        ];
        // Key order in the profile must not matter.
        let p = Profile::new("P", "", &[("z", "a"), ("x", "c"), ("y", "b")]);
        let v = encode_profile(&dims, &p);
        assert_eq!(v.to_vec(), vec![1.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_corner_manhattan() {
        assert_eq!(Corner::A.manhattan(Corner::A), 0);
        assert_eq!(Corner::A.manhattan(Corner::Both), 1);
        assert_eq!(Corner::A.manhattan(Corner::Neither), 1);
        assert_eq!(Corner::A.manhattan(Corner::B), 2);
        assert_eq!(Corner::Both.manhattan(Corner::Neither), 2);
    }

    #[test]
    fn test_corner_index_round_trip() {
        for i in 0..4 {
            let c = Corner::from_index(i).expect("valid corner index");
            assert_eq!(c.index(), i);
        }
        assert_eq!(Corner::from_index(4), None);
    }
}
