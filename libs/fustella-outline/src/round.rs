//! # Corner Rounding
//!
//! Quadratic-Bezier corner rounding for presentation outlines. Die-line
//! geometry stays sharp (vertex counts are contractual); renderers may round
//! a copy of the polygon for display meshes.

use config::constants::{MIN_ROUND_RADIUS, ROUND_RADIUS_DEFAULT, ROUND_STEPS_DEFAULT};
use glam::DVec2;

/// Rounds every corner of a polygon with a quadratic Bezier arc.
///
/// The radius at each corner is limited to half of the shorter adjacent
/// edge; corners with less room than [`MIN_ROUND_RADIUS`] are left sharp.
/// Each rounded corner is replaced by `steps + 1` points.
///
/// # Example
///
/// ```rust
/// use fustella_outline::round_corners;
/// use glam::DVec2;
///
/// let square = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(10.0, 0.0),
///     DVec2::new(10.0, 10.0),
///     DVec2::new(0.0, 10.0),
/// ];
/// let rounded = round_corners(&square, 2.0, 3);
/// assert_eq!(rounded.len(), 16);
/// ```
pub fn round_corners(points: &[DVec2], radius: f64, steps: usize) -> Vec<DVec2> {
    if points.len() < 3 || steps == 0 {
        return points.to_vec();
    }

    let n = points.len();
    let mut out = Vec::with_capacity(n * (steps + 1));

    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let curr = points[i];
        let next = points[(i + 1) % n];

        let v1 = prev - curr;
        let v2 = next - curr;
        let d1 = v1.length();
        let d2 = v2.length();

        let r = radius.min(d1 / 2.0).min(d2 / 2.0);
        if r < MIN_ROUND_RADIUS || d1 == 0.0 || d2 == 0.0 {
            out.push(curr);
            continue;
        }

        let start = curr + v1 / d1 * r;
        let end = curr + v2 / d2 * r;

        out.push(start);
        for s in 1..=steps {
            let t = s as f64 / steps as f64;
            let inv = 1.0 - t;
            out.push(inv * inv * start + 2.0 * inv * t * curr + t * t * end);
        }
    }

    out
}

/// [`round_corners`] with the stock presentation radius and step count
/// ([`ROUND_RADIUS_DEFAULT`], [`ROUND_STEPS_DEFAULT`]).
pub fn round_corners_default(points: &[DVec2]) -> Vec<DVec2> {
    round_corners(points, ROUND_RADIUS_DEFAULT, ROUND_STEPS_DEFAULT)
}
