//! Rescale a raw layout into the renderer's fixed [-90, 90] square.
//!
//! Each axis is centred on the midpoint of its extent and scaled so the
//! extent becomes `OUTPUT_SPAN` wide. An axis with zero extent keeps scale 1.

use crate::config::OUTPUT_SPAN;
use crate::geometry::Point2;

/// Axis-aligned extent of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Extent of `points`, or `None` if there are none.
    pub fn of(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(points.iter().skip(1).fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Per-axis factors mapping the extent onto `OUTPUT_SPAN`.
    pub fn scale(&self) -> (f64, f64) {
        (axis_scale(self.min_x, self.max_x), axis_scale(self.min_y, self.max_y))
    }
}

#[inline]
fn axis_scale(min: f64, max: f64) -> f64 {
    if max != min {
        OUTPUT_SPAN / (max - min)
    } else {
        1.0
    }
}

/// Centre and rescale `points`. Pure; empty input gives empty output.
pub fn normalize(points: &[Point2]) -> Vec<Point2> {
    let Some(bounds) = Bounds::of(points) else {
        return Vec::new();
    };
    let center = bounds.center();
    let (scale_x, scale_y) = bounds.scale();
    points
        .iter()
        .map(|p| Point2::new((p.x - center.x) * scale_x, (p.y - center.y) * scale_y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const HALF: f64 = OUTPUT_SPAN / 2.0;

    fn sample() -> Vec<Point2> {
        vec![
            Point2::new(-3.2, 10.0),
            Point2::new(7.5, 12.5),
            Point2::new(0.1, -4.0),
            Point2::new(2.0, 3.3),
        ]
    }

    #[test]
    fn test_range_and_extremes() {
        let out = normalize(&sample());
        let b = Bounds::of(&out).expect("non-empty");
        assert_abs_diff_eq!(b.min_x, -HALF, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max_x, HALF, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min_y, -HALF, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max_y, HALF, epsilon = 1e-9);
        for p in &out {
            assert!(p.x.abs() <= HALF + 1e-9);
            assert!(p.y.abs() <= HALF + 1e-9);
        }
    }

    #[test]
    fn test_preserves_order_along_each_axis() {
        let input = sample();
        let out = normalize(&input);
        for i in 0..input.len() {
            for j in 0..input.len() {
                assert_eq!(input[i].x < input[j].x, out[i].x < out[j].x);
                assert_eq!(input[i].y < input[j].y, out[i].y < out[j].y);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let once = normalize(&sample());
        let twice = normalize(&once);
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_single_point_goes_to_origin() {
        let out = normalize(&[Point2::new(42.0, -17.0)]);
        assert_eq!(out, vec![Point2::new(0.0, 0.0)]);
    }

    #[test]
    fn test_degenerate_axis_keeps_unit_scale() {
        // Every point shares y, so only x is stretched.
        let input = vec![Point2::new(0.0, 5.0), Point2::new(1.0, 5.0), Point2::new(4.0, 5.0)];
        let out = normalize(&input);
        assert_eq!(Bounds::of(&input).map(|b| b.scale().1), Some(1.0));
        for p in &out {
            assert_eq!(p.y, 0.0);
        }
        assert_abs_diff_eq!(out[0].x, -HALF, epsilon = 1e-12);
        assert_abs_diff_eq!(out[2].x, HALF, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1].x, -45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty() {
        assert!(normalize(&[]).is_empty());
        assert_eq!(Bounds::of(&[]), None);
    }
}
