//! Manhattan comparison between profiles.
//!
//! On one dimension two answers are 0 (same corner), 1 (adjacent corners)
//! or 2 (opposite corners) apart. Summed over all dimensions and divided by
//! the maximum `2 × dimensions`, this gives a similarity percentage.
//! An answer that matches no option contributes 0.

use std::cmp::Ordering;

use serde::Serialize;

use crate::config::MAX_DIMENSION_DISTANCE;
use crate::encoding::tetralemma::corner_of;
use crate::model::{Dimension, Profile};

/// How two answers on one dimension relate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Agreement {
    Same,
    Related,
    Opposite,
}

impl Agreement {
    pub fn from_distance(distance: u32) -> Self {
        match distance {
            0 => Agreement::Same,
            2 => Agreement::Opposite,
            _ => Agreement::Related,
        }
    }
}

/// Per-dimension line of a comparison.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DimensionComparison {
    pub dimension: String,
    pub left: Option<String>,
    pub right: Option<String>,
    pub distance: u32,
    pub agreement: Agreement,
}

/// Full comparison of two profiles.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileComparison {
    pub left: String,
    pub right: String,
    pub total_distance: u32,
    pub max_distance: u32,
    pub similarity_percent: i32,
    pub breakdown: Vec<DimensionComparison>,
}

/// A profile ranked by closeness to a reference profile.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Neighbour {
    pub index: usize,
    pub name: String,
    pub total_distance: u32,
    pub similarity_percent: i32,
}

/// Manhattan distance of two answers on `dimension`.
pub fn dimension_distance(dimension: &Dimension, left: Option<&str>, right: Option<&str>) -> u32 {
    let a = left.and_then(|v| corner_of(dimension, v));
    let b = right.and_then(|v| corner_of(dimension, v));
    match (a, b) {
        (Some(a), Some(b)) => a.manhattan(b),
        _ => 0,
    }
}

/// Similarity in percent, rounded to the nearest integer.
pub fn similarity_percent(total_distance: u32, max_distance: u32) -> i32 {
    if max_distance == 0 {
        return 100;
    }
    ((1.0 - total_distance as f64 / max_distance as f64) * 100.0).round() as i32
}

pub fn compare_profiles(dimensions: &[Dimension], left: &Profile, right: &Profile) -> ProfileComparison {
    let breakdown: Vec<DimensionComparison> = dimensions
        .iter()
        .map(|dim| {
            let l = left.answer(&dim.id);
            let r = right.answer(&dim.id);
            let distance = dimension_distance(dim, l, r);
            DimensionComparison {
                dimension: dim.id.clone(),
                left: l.map(str::to_string),
                right: r.map(str::to_string),
                distance,
                agreement: Agreement::from_distance(distance),
            }
        })
        .collect();

    let total_distance = breakdown.iter().map(|c| c.distance).sum();
    let max_distance = MAX_DIMENSION_DISTANCE * dimensions.len() as u32;
    ProfileComparison {
        left: left.name.clone(),
        right: right.name.clone(),
        total_distance,
        max_distance,
        similarity_percent: similarity_percent(total_distance, max_distance),
        breakdown,
    }
}

/// Every other profile ordered by distance to `profiles[index]`, ties by name.
pub fn rank_neighbours(dimensions: &[Dimension], profiles: &[Profile], index: usize) -> Vec<Neighbour> {
    let Some(reference) = profiles.get(index) else {
        return Vec::new();
    };
    let mut ranked: Vec<Neighbour> = profiles
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(i, p)| {
            let cmp = compare_profiles(dimensions, reference, p);
            Neighbour {
                index: i,
                name: p.name.clone(),
                total_distance: cmp.total_distance,
                similarity_percent: cmp.similarity_percent,
            }
        })
        .collect();
    ranked.sort_by(|a, b| match a.total_distance.cmp(&b.total_distance) {
        Ordering::Equal => a.name.cmp(&b.name),
        other => other,
    });
    ranked
}
