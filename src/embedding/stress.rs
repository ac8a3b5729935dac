//! Stress-minimizing 2D layout (metric MDS by gradient descent).
//!
//! Minimises Σ_{i<j} (d'_ij − d_ij)² where d' is the layout distance and d
//! the target. Each iteration:
//!
//! ```text
//! grad_i = Σ_j (d'_ij − d_ij) / d'_ij · (c_i − c_j)
//! c_i   -= lr · grad_i / n
//! lr    *= decay
//! ```
//!
//! With lr = 1 the step is exactly the Guttman transform, so early
//! iterations behave like SMACOF and the decay relaxes later ones.
//!
//! Two gradient accumulators:
//! 1. `accumulate_sequential`: pair loop, the reference
//! 2. `accumulate_parallel`: one rayon task per point, bit-identical output

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use rayon::prelude::*;
use tracing::{debug, Level};

use crate::config::{
    DEFAULT_ITERATIONS, DEFAULT_SEED, DISTANCE_EPSILON, INITIAL_LEARNING_RATE, INIT_RANGE,
    LEARNING_RATE_DECAY,
};
use crate::error::LayoutError;
use crate::geometry::{DistanceMatrix, Point2};

/// Optimizer parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct StressConfig {
    /// Seed for the initial layout.
    pub seed: u64,

    /// Fixed iteration budget. There is no early stopping.
    pub iterations: usize,

    /// Learning rate at iteration 0.
    pub initial_learning_rate: f64,

    /// Multiplicative decay applied after every iteration.
    pub decay: f64,

    /// Added to every layout distance before dividing by it.
    pub epsilon: f64,

    /// Initial coordinates are uniform in [-init_range, init_range].
    pub init_range: f64,

    /// Accumulate gradients across rayon workers.
    pub parallel: bool,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            iterations: DEFAULT_ITERATIONS,
            initial_learning_rate: INITIAL_LEARNING_RATE,
            decay: LEARNING_RATE_DECAY,
            epsilon: DISTANCE_EPSILON,
            init_range: INIT_RANGE,
            parallel: false,
        }
    }
}

impl StressConfig {
    /// Reject parameters the descent cannot run with.
    ///
    /// The learning rate and initial range must be finite and positive, the
    /// decay must lie in (0, 1], and epsilon must be finite and positive so
    /// coincident points never divide by zero.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let positive = |field: &'static str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(LayoutError::InvalidConfig {
                    field,
                    value,
                    reason: "must be finite and positive",
                })
            }
        };
        positive("learning rate", self.initial_learning_rate)?;
        positive("epsilon", self.epsilon)?;
        positive("init range", self.init_range)?;
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(LayoutError::InvalidConfig {
                field: "decay",
                value: self.decay,
                reason: "must be in (0, 1]",
            });
        }
        Ok(())
    }
}

/// Stress of a layout against its targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StressReport {
    /// Σ_{i<j} (d'_ij − d_ij)².
    pub raw: f64,

    /// Kruskal stress-1: sqrt(raw / Σ_{i<j} d_ij²). 0 when all targets are 0.
    pub normalized: f64,
}

/// Seeded uniform layout, x then y for each point in turn.
pub fn initial_layout(n: usize, seed: u64, init_range: f64) -> Result<Vec<Point2>, LayoutError> {
    if !(init_range.is_finite() && init_range > 0.0) {
        return Err(LayoutError::InvalidConfig {
            field: "init range",
            value: init_range,
            reason: "must be finite and positive",
        });
    }
    let dist = Uniform::new_inclusive(-init_range, init_range);
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..n)
        .map(|_| {
            let x = dist.sample(&mut rng);
            let y = dist.sample(&mut rng);
            Point2::new(x, y)
        })
        .collect())
}

/// Gradient contribution of pair (a, b) to `a`. `b` receives the negation.
#[inline]
fn pair_term(a: &Point2, b: &Point2, target: f64, epsilon: f64) -> (f64, f64) {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let current = (dx * dx + dy * dy).sqrt() + epsilon;
    let scale = (current - target) / current;
    (scale * dx, scale * dy)
}

// ──────────────────────────────────────────────────────────────
// 1. Sequential accumulation (reference)
// ──────────────────────────────────────────────────────────────

fn accumulate_sequential(
    points: &[Point2],
    distances: &DistanceMatrix,
    epsilon: f64,
    grads: &mut [Point2],
) {
    let n = points.len();
    grads.iter_mut().for_each(|g| *g = Point2::origin());
    for i in 0..n {
        for j in (i + 1)..n {
            let (gx, gy) = pair_term(&points[i], &points[j], distances.get(i, j), epsilon);
            grads[i].x += gx;
            grads[i].y += gy;
            grads[j].x -= gx;
            grads[j].y -= gy;
        }
    }
}

// ──────────────────────────────────────────────────────────────
// 2. Parallel accumulation (rayon, one row per task)
// ──────────────────────────────────────────────────────────────

/// Row r visits partners in ascending order and evaluates each pair in
/// (lower, higher) orientation, matching the sequential loop's operation
/// order on grads[r] exactly.
fn accumulate_parallel(points: &[Point2], distances: &DistanceMatrix, epsilon: f64) -> Vec<Point2> {
    let n = points.len();
    (0..n)
        .into_par_iter()
        .map(|r| {
            let mut g = Point2::origin();
            for j in 0..r {
                let (gx, gy) = pair_term(&points[j], &points[r], distances.get(j, r), epsilon);
                g.x -= gx;
                g.y -= gy;
            }
            for j in (r + 1)..n {
                let (gx, gy) = pair_term(&points[r], &points[j], distances.get(r, j), epsilon);
                g.x += gx;
                g.y += gy;
            }
            g
        })
        .collect()
}

// ──────────────────────────────────────────────────────────────
// Driver
// ──────────────────────────────────────────────────────────────

/// Lay out `distances.len()` points in 2D.
///
/// Deterministic in (`distances`, `config`). Fewer than two points need no
/// optimisation: zero points give an empty layout, one point sits at the
/// origin. The config is validated before anything else.
pub fn optimize(
    distances: &DistanceMatrix,
    config: &StressConfig,
) -> Result<Vec<Point2>, LayoutError> {
    config.validate()?;
    let n = distances.len();
    match n {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![Point2::origin()]),
        _ => {}
    }

    let mut points = initial_layout(n, config.seed, config.init_range)?;
    let mut grads = vec![Point2::origin(); n];
    let mut learning_rate = config.initial_learning_rate;
    let n_f = n as f64;
    let log_every = (config.iterations / 10).max(1);

    for iteration in 0..config.iterations {
        if config.parallel {
            grads = accumulate_parallel(&points, distances, config.epsilon);
        } else {
            accumulate_sequential(&points, distances, config.epsilon, &mut grads);
        }

        // Barrier: every gradient is final before any point moves.
        for (p, g) in points.iter_mut().zip(grads.iter()) {
            p.x -= learning_rate * g.x / n_f;
            p.y -= learning_rate * g.y / n_f;
        }
        learning_rate *= config.decay;

        if tracing::enabled!(Level::DEBUG) && (iteration + 1) % log_every == 0 {
            let report = stress(distances, &points)?;
            debug!(
                iteration = iteration + 1,
                learning_rate,
                raw_stress = report.raw,
                normalized_stress = report.normalized,
                "stress descent"
            );
        }
    }

    Ok(points)
}

/// Stress of `points` against `distances`. The layout must have one point
/// per matrix row.
pub fn stress(distances: &DistanceMatrix, points: &[Point2]) -> Result<StressReport, LayoutError> {
    if points.len() != distances.len() {
        return Err(LayoutError::LayoutSizeMismatch {
            points: points.len(),
            profiles: distances.len(),
        });
    }
    let n = points.len();
    let mut raw = 0.0;
    let mut target_sq = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let target = distances.get(i, j);
            let diff = points[i].distance(&points[j]) - target;
            raw += diff * diff;
            target_sq += target * target;
        }
    }
    let normalized = if target_sq > 0.0 {
        (raw / target_sq).sqrt()
    } else {
        0.0
    };
    Ok(StressReport { raw, normalized })
}
