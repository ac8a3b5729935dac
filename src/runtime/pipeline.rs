//! Full mapping pipeline: dataset in → map entries out.
//!
//! Stages, strictly forward:
//! 1. Tetralemma encoding: one vector per profile
//! 2. Distance matrix: symmetric pairwise Euclidean
//! 3. Stress optimisation: raw 2D layout
//! 4. Normalisation: rescale into [-90, 90]

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::embedding::{normalize, optimize, stress, StressConfig, StressReport};
use crate::encoding::encode_profiles;
use crate::error::LayoutError;
use crate::geometry::{DistanceMatrix, Point2};
use crate::model::{Dataset, MapEntry};

/// Pipeline configuration.
#[derive(Clone, Debug, Default)]
pub struct PipelineConfig {
    /// Optimizer parameters.
    pub stress: StressConfig,

    /// Round output coordinates to this many decimals. `None` keeps full precision.
    pub decimals: Option<u32>,
}

/// Per-run stage timings (in microseconds).
#[derive(Clone, Debug, Default)]
pub struct StageTimings {
    pub encode_us: u64,
    pub distance_us: u64,
    pub optimize_us: u64,
    pub normalize_us: u64,
    pub total_us: u64,
}

impl StageTimings {
    /// Compute percentage breakdown.
    pub fn breakdown(&self) -> Vec<(&str, f32)> {
        let t = self.total_us as f32;
        if t == 0.0 {
            return vec![];
        }
        vec![
            ("encode", self.encode_us as f32 / t * 100.0),
            ("distance", self.distance_us as f32 / t * 100.0),
            ("optimize", self.optimize_us as f32 / t * 100.0),
            ("normalize", self.normalize_us as f32 / t * 100.0),
        ]
    }
}

/// Everything one run produces.
#[derive(Debug)]
pub struct MapResult {
    /// Output document entries, in profile order.
    pub entries: Vec<MapEntry>,

    /// Target dissimilarities.
    pub distances: DistanceMatrix,

    /// Optimizer output before normalisation.
    pub raw_layout: Vec<Point2>,

    /// Stress of `raw_layout` against `distances`.
    pub stress: StressReport,

    pub timings: StageTimings,
}

/// The mapping pipeline orchestrator.
pub struct MapPipeline {
    pub config: PipelineConfig,
}

impl MapPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run all four stages over `dataset`.
    pub fn run(&self, dataset: &Dataset) -> Result<MapResult, LayoutError> {
        self.config.stress.validate()?;
        let start = Instant::now();
        let mut timings = StageTimings::default();

        for miss in dataset.unmatched_answers() {
            match miss.value {
                Some(value) => warn!(
                    profile = %miss.profile,
                    dimension = %miss.dimension,
                    value = %value,
                    "answer matches no option; encoding as neutral"
                ),
                None => debug!(
                    profile = %miss.profile,
                    dimension = %miss.dimension,
                    "no answer; encoding as neutral"
                ),
            }
        }

        let t = Instant::now();
        let encoded = encode_profiles(&dataset.dimensions, &dataset.profiles);
        timings.encode_us = t.elapsed().as_micros() as u64;
        info!(
            "Encoded {} profiles over {} dimensions",
            encoded.len(),
            dataset.dimensions.len()
        );

        let t = Instant::now();
        let distances = DistanceMatrix::from_vectors(&encoded)?;
        timings.distance_us = t.elapsed().as_micros() as u64;
        debug!(max_distance = distances.max_distance(), "distance matrix built");

        let cfg = &self.config.stress;
        info!(
            "Running stress layout: {} iterations, seed {}, parallel={}",
            cfg.iterations, cfg.seed, cfg.parallel
        );
        let t = Instant::now();
        let raw_layout = optimize(&distances, cfg)?;
        timings.optimize_us = t.elapsed().as_micros() as u64;

        let report = stress(&distances, &raw_layout)?;
        info!(
            "Stress: raw {:.4}, normalized {:.4}",
            report.raw, report.normalized
        );

        let t = Instant::now();
        let layout = normalize(&raw_layout);
        timings.normalize_us = t.elapsed().as_micros() as u64;

        let entries = dataset
            .profiles
            .iter()
            .zip(layout.iter())
            .map(|(profile, p)| {
                let entry = MapEntry::from_profile(profile, p.x, p.y);
                match self.config.decimals {
                    Some(d) => entry.rounded(d),
                    None => entry,
                }
            })
            .collect();

        timings.total_us = start.elapsed().as_micros() as u64;

        Ok(MapResult {
            entries,
            distances,
            raw_layout,
            stress: report,
            timings,
        })
    }
}
